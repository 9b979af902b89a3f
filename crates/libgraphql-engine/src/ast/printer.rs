use crate::ast::Node;
use crate::ast::NodeKind;

/// Prints a value literal compactly, the way it would be written in a
/// document: `null`, `42`, `"hello"`, `[1, 2]`, `{a: 1}`, `$var`.
///
/// Non-value nodes print as their kind name.
pub fn print_value(node: &Node) -> String {
    let mut out = String::new();
    write_value(&mut out, node);
    out
}

fn write_value(out: &mut String, node: &Node) {
    match node.kind() {
        NodeKind::NullValue(_) => out.push_str("null"),
        NodeKind::IntValue(int) => out.push_str(&int.value.to_string()),
        NodeKind::FloatValue(float) => out.push_str(&format_float(float.value)),
        NodeKind::StringValue(string) => write_string(out, &string.value),
        NodeKind::BooleanValue(boolean) => out.push_str(&boolean.value.to_string()),
        NodeKind::EnumValue(enum_val) => out.push_str(&enum_val.name),
        NodeKind::VariableReference(var_ref) => {
            out.push('$');
            out.push_str(&var_ref.name);
        },
        NodeKind::ListValue(list) => {
            out.push('[');
            for (idx, value) in list.values.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, value);
            }
            out.push(']');
        },
        NodeKind::ObjectValue(obj) => {
            out.push('{');
            for (idx, (name, value)) in obj.field_entries().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(name);
                out.push_str(": ");
                write_value(out, value);
            }
            out.push('}');
        },
        other => out.push_str(other.name()),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn write_string(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => out.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => out.push(ch),
        }
    }
    out.push('"');
}

/// Prints a type reference node in GraphQL notation (e.g. `[Int!]!`).
pub fn print_type(node: &Node) -> String {
    match node.kind() {
        NodeKind::TypeName(type_name) => type_name.name.clone(),
        NodeKind::ListType(list) => format!("[{}]", print_type(&list.inner)),
        NodeKind::NonNullType(non_null) => format!("{}!", print_type(&non_null.inner)),
        other => other.name().to_string(),
    }
}
