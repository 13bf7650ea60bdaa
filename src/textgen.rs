//! Canned filler text and random identity data.

use rand::Rng;

const LOREM_PARAGRAPHS: [&str; 5] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae dicta sunt explicabo.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt.",
    "Neque porro quisquam est, qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit, sed quia non numquam eius modi tempora incidunt ut labore et dolore magnam aliquam quaerat voluptatem.",
];

pub const LOREM_MAX_PARAGRAPHS: usize = 10;

const FIRST_NAMES: [&str; 50] = [
    "Maria", "Ana", "Fernanda", "Juliana", "Patricia", "Mariana", "Amanda", "Bruna", "Camila",
    "Carla", "João", "Pedro", "Carlos", "Lucas", "Gabriel", "Rafael", "Felipe", "Bruno", "André",
    "Ricardo", "Paulo", "Marcos", "Thiago", "Daniel", "Rodrigo", "Gustavo", "Eduardo", "Marcelo",
    "Fábio", "Leonardo", "Beatriz", "Isabela", "Larissa", "Vanessa", "Renata", "Tatiana",
    "Priscila", "Monique", "Débora", "Luciana", "Roberto", "Antonio", "José", "Francisco",
    "Vitor", "Maurício", "Vinicius", "Henrique", "Diego", "Otávio",
];

const MIDDLE_NAMES: [&str; 40] = [
    "Joana", "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
    "Lima", "James", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes", "Soares",
    "Fernandes", "Gomes", "Rocha", "Dias", "Moreira", "Araújo", "Mendes", "Freitas", "Barbosa",
    "Nunes", "Teixeira", "Monteiro", "Cardoso", "Reis", "Machado", "Ramos", "Azevedo",
    "Cavalcanti", "Nascimento", "Moraes", "Campos", "Duarte",
];

const SURNAMES: [&str; 50] = [
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira", "Lima",
    "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes", "Soares", "Fernandes", "Gomes",
    "Rocha", "Dias", "Moreira", "Araújo", "Mendes", "Freitas", "Barbosa", "Nunes", "Teixeira",
    "Monteiro", "Cardoso", "Reis", "Machado", "Ramos", "Azevedo", "Cavalcanti", "Nascimento",
    "Moraes", "Campos", "Duarte", "Correia", "Cunha", "Pires", "Vieira", "Baptista", "Barros",
    "Castro", "Dantas", "Farias", "Guedes", "Leite", "Macedo",
];

/// Join `paragraphs` filler paragraphs (clamped to 1..=10) with blank lines,
/// cycling through the fixed pool.
pub fn lorem_ipsum(paragraphs: usize) -> String {
    let count = paragraphs.clamp(1, LOREM_MAX_PARAGRAPHS);
    (0..count)
        .map(|i| LOREM_PARAGRAPHS[i % LOREM_PARAGRAPHS.len()])
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// A random Brazilian full name; 70% of the results carry a middle name.
pub fn random_name() -> String {
    let mut rng = rand::thread_rng();
    let first = pick(&mut rng, &FIRST_NAMES);
    let surname = pick(&mut rng, &SURNAMES);
    if rng.gen_bool(0.7) {
        let middle = pick(&mut rng, &MIDDLE_NAMES);
        format!("{first} {middle} {surname}")
    } else {
        format!("{first} {surname}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_paragraph_by_default_bounds() {
        assert_eq!(lorem_ipsum(0), LOREM_PARAGRAPHS[0]);
        assert_eq!(lorem_ipsum(1), LOREM_PARAGRAPHS[0]);
    }

    #[test]
    fn paragraph_count_is_clamped_to_ten() {
        let text = lorem_ipsum(50);
        assert_eq!(text.split("\n\n").count(), LOREM_MAX_PARAGRAPHS);
    }

    #[test]
    fn pool_cycles_after_five_paragraphs() {
        let text = lorem_ipsum(6);
        let paragraphs: Vec<_> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 6);
        assert_eq!(paragraphs[5], paragraphs[0]);
    }

    #[test]
    fn names_have_two_or_three_parts() {
        for _ in 0..64 {
            let name = random_name();
            let parts = name.split(' ').count();
            assert!(parts == 2 || parts == 3, "{name}");
        }
    }
}
