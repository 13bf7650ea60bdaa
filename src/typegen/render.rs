//! Per-target source rendering over the ordered type sequence.

use super::registry::SynthesizedType;
use super::{GenerateOptions, JavaStyle, Target};
use std::fmt::Write;

pub fn render(ty: &SynthesizedType, options: &GenerateOptions) -> String {
    match options.target {
        Target::TypeScript => typescript_interface(ty),
        Target::Java => match options.java_style {
            JavaStyle::Lombok => java_class(ty),
            JavaStyle::Record => java_record(ty),
        },
    }
}

fn typescript_interface(ty: &SynthesizedType) -> String {
    let mut code = format!("export interface {} {{\n", ty.name);
    for field in &ty.fields {
        let _ = writeln!(code, "  {}: {};", field.name, field.ty);
    }
    code.push('}');
    code
}

fn needs_list_import(ty: &SynthesizedType) -> bool {
    ty.fields.iter().any(|f| f.ty.starts_with("List<"))
}

const JACKSON_IMPORTS: &str = "\
import com.fasterxml.jackson.annotation.JsonInclude;
import com.fasterxml.jackson.annotation.JsonInclude.Include;
import com.fasterxml.jackson.annotation.JsonProperty;
";

const LOMBOK_IMPORTS: &str = "\
import lombok.AllArgsConstructor;
import lombok.Builder;
import lombok.Data;
import lombok.NoArgsConstructor;
";

fn java_class(ty: &SynthesizedType) -> String {
    let mut code = String::from("package com.example.dto;\n\n");
    code.push_str(JACKSON_IMPORTS);
    code.push_str(LOMBOK_IMPORTS);
    if needs_list_import(ty) {
        code.push_str("import java.util.List;\n");
    }
    code.push('\n');
    code.push_str("@Data\n");
    code.push_str("@AllArgsConstructor\n");
    code.push_str("@NoArgsConstructor\n");
    code.push_str("@Builder\n");
    code.push_str("@JsonInclude(Include.NON_NULL)\n");
    let _ = write!(code, "public class {} {{\n\n", ty.name);
    for field in &ty.fields {
        let _ = writeln!(code, "  @JsonProperty(\"{}\")", field.original_key);
        let _ = writeln!(code, "  private {} {};", field.ty, field.name);
    }
    code.push('}');
    code
}

fn java_record(ty: &SynthesizedType) -> String {
    let mut code = String::from("package com.example.dto;\n\n");
    code.push_str(JACKSON_IMPORTS);
    if needs_list_import(ty) {
        code.push_str("import java.util.List;\n");
    }
    code.push('\n');
    code.push_str("@JsonInclude(Include.NON_NULL)\n");
    let _ = write!(code, "public record {}(\n", ty.name);
    let last = ty.fields.len().saturating_sub(1);
    for (index, field) in ty.fields.iter().enumerate() {
        let _ = writeln!(code, "  @JsonProperty(\"{}\")", field.original_key);
        let comma = if index == last { "" } else { "," };
        let _ = writeln!(code, "  {} {}{comma}", field.ty, field.name);
    }
    code.push_str(") {}");
    code
}
