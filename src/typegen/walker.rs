//! Recursive classification of JSON values into type references.

use super::registry::{Field, Registry, SynthesizedType};
use super::{camel_case, Target};
use indexmap::IndexSet;
use serde_json::Value;

/// Resolved type for one JSON node: the rendered type text plus the
/// synthesized type it (or, for arrays, its element) points at.
#[derive(Debug, Clone)]
pub struct TypeRef {
    pub text: String,
    pub target: Option<String>,
}

impl TypeRef {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
        }
    }

    fn reference(name: String) -> Self {
        Self {
            text: name.clone(),
            target: Some(name),
        }
    }

    /// True when the text is directly the referenced type's name, as opposed
    /// to an array wrapping it.
    fn is_direct_reference(&self) -> bool {
        self.target.as_deref() == Some(self.text.as_str())
    }
}

pub struct Walker<'a> {
    registry: &'a mut Registry,
    target: Target,
    suffix: String,
}

impl<'a> Walker<'a> {
    pub fn new(registry: &'a mut Registry, target: Target, suffix: &str) -> Self {
        Self {
            registry,
            target,
            suffix: suffix.to_string(),
        }
    }

    /// Classify one JSON node. Object nodes are fully registered before this
    /// returns, so a parent's field list only ever names existing types.
    pub fn infer(&mut self, value: &Value, type_name_hint: &str, property_key: &str) -> TypeRef {
        match value {
            Value::Null => TypeRef::plain(self.target.untyped()),
            Value::Bool(_) => TypeRef::plain(match self.target {
                Target::TypeScript => "boolean",
                Target::Java => "Boolean",
            }),
            Value::Number(n) => TypeRef::plain(self.number_type(n)),
            Value::String(_) => TypeRef::plain(match self.target {
                Target::TypeScript => "string",
                Target::Java => "String",
            }),
            Value::Array(items) => self.infer_array(items, type_name_hint, property_key),
            Value::Object(map) => self.infer_object(map, type_name_hint),
        }
    }

    /// Only the first element decides the item type; heterogeneous arrays
    /// are not merged.
    fn infer_array(&mut self, items: &[Value], hint: &str, property_key: &str) -> TypeRef {
        let Some(first) = items.first() else {
            return TypeRef::plain(self.target.untyped_list());
        };
        let item_hint = if property_key.is_empty() {
            self.target.item_type_name(hint)
        } else {
            self.target.type_name(property_key, &self.suffix)
        };
        let item = self.infer(first, &item_hint, "");
        let text = match self.target {
            Target::TypeScript => format!("{}[]", item.text),
            Target::Java if item.text == "Object" => "List<Object>".to_string(),
            Target::Java => format!("List<{}>", item.text),
        };
        TypeRef {
            text,
            target: item.target,
        }
    }

    fn infer_object(&mut self, map: &serde_json::Map<String, Value>, hint: &str) -> TypeRef {
        let name = self.target.canonical_type_name(hint);
        if self.registry.contains(&name) {
            // Same-name reuse; in practice only the root call can hit this,
            // nested names being path-derived.
            return TypeRef::reference(name);
        }

        let mut fields = Vec::with_capacity(map.len());
        let mut dependencies = IndexSet::new();
        for (key, value) in map {
            let nested_hint = self.target.type_name(key, &self.suffix);
            let resolved = self.infer(value, &nested_hint, key);
            if let Some(dep) = &resolved.target {
                if dep != &name {
                    dependencies.insert(dep.clone());
                }
            }
            fields.push(Field {
                name: camel_case(key),
                original_key: key.clone(),
                is_reference: resolved.is_direct_reference(),
                ty: resolved.text,
            });
        }

        self.registry.insert(SynthesizedType {
            name: name.clone(),
            fields,
            dependencies,
        });
        TypeRef::reference(name)
    }

    fn number_type(&self, n: &serde_json::Number) -> &'static str {
        match self.target {
            Target::TypeScript => "number",
            Target::Java => {
                if is_mathematical_integer(n) {
                    "Long"
                } else {
                    "Double"
                }
            }
        }
    }
}

/// Whether the numeric value is mathematically an integer; `3.0` counts.
fn is_mathematical_integer(n: &serde_json::Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64()
        .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn walk(value: &Value, target: Target, root: &str, suffix: &str) -> (Registry, TypeRef) {
        let mut registry = Registry::new();
        let root_name = target.type_name(root, suffix);
        let reference = Walker::new(&mut registry, target, suffix).infer(value, &root_name, "");
        (registry, reference)
    }

    #[test]
    fn null_maps_to_untyped_placeholder_and_stays_unregistered() {
        let (registry, reference) = walk(&Value::Null, Target::TypeScript, "x", "");
        assert_eq!(reference.text, "any");
        assert!(reference.target.is_none());
        assert!(registry.is_empty());

        let (_, reference) = walk(&Value::Null, Target::Java, "x", "");
        assert_eq!(reference.text, "Object");
    }

    #[test]
    fn primitives_map_per_target() {
        let (_, r) = walk(&json!("hi"), Target::TypeScript, "x", "");
        assert_eq!(r.text, "string");
        let (_, r) = walk(&json!("hi"), Target::Java, "x", "");
        assert_eq!(r.text, "String");
        let (_, r) = walk(&json!(true), Target::TypeScript, "x", "");
        assert_eq!(r.text, "boolean");
        let (_, r) = walk(&json!(true), Target::Java, "x", "");
        assert_eq!(r.text, "Boolean");
    }

    #[test]
    fn java_numbers_split_on_integrality() {
        let (_, r) = walk(&json!(3), Target::Java, "x", "");
        assert_eq!(r.text, "Long");
        let (_, r) = walk(&json!(3.0), Target::Java, "x", "");
        assert_eq!(r.text, "Long");
        let (_, r) = walk(&json!(3.5), Target::Java, "x", "");
        assert_eq!(r.text, "Double");
        let (_, r) = walk(&json!(3.5), Target::TypeScript, "x", "");
        assert_eq!(r.text, "number");
    }

    #[test]
    fn empty_array_is_untyped_list() {
        let (_, r) = walk(&json!([]), Target::TypeScript, "x", "");
        assert_eq!(r.text, "any[]");
        let (_, r) = walk(&json!([]), Target::Java, "x", "");
        assert_eq!(r.text, "List<Object>");
    }

    #[test]
    fn array_of_null_collapses_to_object_list_in_java() {
        let (_, r) = walk(&json!([null]), Target::Java, "x", "");
        assert_eq!(r.text, "List<Object>");
    }

    #[test]
    fn object_registers_once_and_returns_reference() {
        let (registry, reference) = walk(&json!({"a": 1}), Target::TypeScript, "user", "");
        assert_eq!(reference.text, "IUser");
        assert_eq!(reference.target.as_deref(), Some("IUser"));
        assert_eq!(registry.len(), 1);
        let ty = registry.get("IUser").unwrap();
        assert_eq!(ty.fields.len(), 1);
        assert_eq!(ty.fields[0].original_key, "a");
        assert!(!ty.fields[0].is_reference);
    }

    #[test]
    fn nested_type_is_finalized_before_parent() {
        let (registry, _) = walk(
            &json!({"address": {"city": "SP"}, "id": 1}),
            Target::Java,
            "user",
            "",
        );
        let ordered = registry.ordered();
        assert_eq!(ordered[0].name, "AddressDto");
        assert_eq!(ordered[1].name, "UserDto");

        let user = registry.get("UserDto").unwrap();
        let address_field = &user.fields[0];
        assert_eq!(address_field.ty, "AddressDto");
        assert!(address_field.is_reference);
        assert!(user.dependencies.contains("AddressDto"));
    }

    #[test]
    fn array_of_references_records_element_dependency() {
        let (registry, _) = walk(&json!({"items": [{"sku": "x"}]}), Target::Java, "order", "");
        let order = registry.get("OrderDto").unwrap();
        let field = &order.fields[0];
        assert_eq!(field.ty, "List<ItemsDto>");
        assert!(!field.is_reference);
        assert!(order.dependencies.contains("ItemsDto"));
    }

    #[test]
    fn field_order_follows_document_order() {
        let (registry, _) = walk(
            &json!({"zeta": 1, "alpha": 2, "mid": 3}),
            Target::TypeScript,
            "x",
            "",
        );
        let keys: Vec<_> = registry.get("IX").unwrap()
            .fields
            .iter()
            .map(|f| f.original_key.as_str())
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn same_name_shape_is_not_rewalked() {
        // Two keys deriving the same type name: the second occurrence reuses
        // the first registration.
        let (registry, _) = walk(
            &json!({"item": {"a": 1}, "nested": {"item": {"b": 2}}}),
            Target::TypeScript,
            "root",
            "",
        );
        let item = registry.get("IItem").unwrap();
        assert_eq!(item.fields.len(), 1);
        assert_eq!(item.fields[0].original_key, "a");
    }
}
