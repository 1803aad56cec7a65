//! Printf-style message formatting
//!
//! Mirrors conventional console formatting: `%s`, `%d`/`%i`, `%f`, `%j`,
//! `%o`/`%O` and the `%%` escape. Arguments are JSON values so any
//! `Serialize` type can be passed through the logging macros.

use serde_json::Value;

/// Apply `template` to `args`.
///
/// With no arguments the template is returned untouched, so a lone message
/// containing `%` characters is never treated as a template.
pub fn format_message(template: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) => {
                chars.next();
                match remaining.next() {
                    Some(arg) => out.push_str(&substitute(spec, arg)),
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&render_string(arg));
    }

    out
}

/// Convert any serializable value into a format argument.
///
/// Values that fail to serialize (e.g. maps with non-string keys) become a
/// placeholder string instead of aborting the log call.
pub fn to_arg<T: serde::Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {}>", e)))
}

fn substitute(spec: char, arg: &Value) -> String {
    match spec {
        's' => render_string(arg),
        'd' | 'i' => render_integer(arg, spec == 'd'),
        'f' => match as_number(arg) {
            Some(n) => render_float(n),
            None => "NaN".to_string(),
        },
        // 'j', 'o', 'O'
        _ => arg.to_string(),
    }
}

/// `%s` and surplus arguments: strings verbatim, everything else as JSON.
fn render_string(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `%d` keeps fractional numbers as they are, `%i` truncates them.
fn render_integer(arg: &Value, keep_fraction: bool) -> String {
    match arg {
        Value::Number(n) if n.is_f64() && !keep_fraction => {
            n.as_f64().map(|f| render_float(f.trunc())).unwrap_or_default()
        }
        Value::Number(n) => n.to_string(),
        other => match as_number(other) {
            Some(f) if keep_fraction => render_float(f),
            Some(f) => render_float(f.trunc()),
            None => "NaN".to_string(),
        },
    }
}

fn as_number(arg: &Value) -> Option<f64> {
    match arg {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
