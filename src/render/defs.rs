//! defs renderer — the s-expression declarations read by binding generators.
//!
//! Layout is fixed: two-space indentation, every stanza closed by `)` and
//! followed by one blank line. Downstream tools compare it literally.

use crate::classify::{classify, FunctionKind};
use crate::error::Result;
use crate::model::*;
use crate::render::{EmitOptions, EntityKind, Renderer};
use log::debug;

/// Implicit trailing parameter of throwing functions.
const ERROR_PARAMETER: (&str, &str) = ("GError**", "error");

pub struct DefsRenderer {
    options: EmitOptions,
}

impl DefsRenderer {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }
}

impl Renderer for DefsRenderer {
    fn render(&self, model: &Model) -> Result<String> {
        let mut output = String::new();

        if self.options.emits(EntityKind::Enums) {
            for enumeration in &model.enumerations {
                output.push_str(&render_enumeration(enumeration));
            }
        }

        if self.options.emits(EntityKind::Methods) {
            for record in &model.records {
                for function in &record.functions {
                    let kind = classify(function, record);
                    if kind == FunctionKind::Function && self.options.bound_only {
                        debug!("skipping free function {}", function.c_name());
                        continue;
                    }
                    output.push_str(&render_function(function, record, kind));
                }
            }
        }

        Ok(output)
    }
}

/// `define-enum-extended` / `define-flags-extended` stanza.
pub fn render_enumeration(enumeration: &Enumeration) -> String {
    let enum_type = if enumeration.is_flag { "flags" } else { "enum" };
    let mut lines = vec![
        format!("(define-{}-extended {}", enum_type, enumeration.name()),
        format!("  (in-module \"{}\")", enumeration.module),
        format!("  (c-name \"{}\")", enumeration.c_name()),
        "  (values".to_string(),
    ];
    for member in &enumeration.members {
        lines.push(format!(
            "    '(\"{}\" \"{}\" \"{}\")",
            member.name, member.c_name, member.value
        ));
    }
    lines.push("  )".to_string());
    lines.push(")".to_string());

    finish_stanza(lines)
}

/// `define-method` or `define-function` stanza for a record's function.
pub fn render_function(function: &Function, record: &Record, kind: FunctionKind) -> String {
    let mut lines = Vec::new();

    match kind {
        FunctionKind::Method => {
            lines.push(format!("(define-method {}", function.name()));
            lines.push(format!("  (of-object \"{}\")", record.c_name()));
            lines.push(format!("  (c-name \"{}\")", function.c_name()));
        }
        FunctionKind::Constructor => {
            lines.push(format!("(define-function {}", function.c_name()));
            lines.push(format!("  (c-name \"{}\")", function.c_name()));
            lines.push(format!("  (is-constructor-of \"{}\")", record.c_name()));
        }
        FunctionKind::Function => {
            lines.push(format!("(define-function {}", function.c_name()));
            lines.push(format!("  (c-name \"{}\")", function.c_name()));
        }
    }

    lines.push(format!(
        "  (return-type \"{}\")",
        function.return_c_type().unwrap_or("void")
    ));

    let mut params: Vec<(&str, &str)> = function
        .parameters
        .iter()
        .map(|p| (p.c_type(), p.name.as_str()))
        .collect();
    if function.throws {
        params.push(ERROR_PARAMETER);
    }

    if !params.is_empty() {
        lines.push("  (parameters".to_string());
        for (c_type, name) in params {
            lines.push(format!("    '(\"{}\" \"{}\")", c_type, name));
        }
        lines.push("  )".to_string());
    }
    lines.push(")".to_string());

    finish_stanza(lines)
}

fn finish_stanza(lines: Vec<String>) -> String {
    let mut stanza = lines.join("\n");
    stanza.push_str("\n\n");
    stanza
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::parser::tests::gir;

    fn render(body: &str, options: EmitOptions) -> String {
        let model = parse_str(&gir(body)).unwrap();
        DefsRenderer::new(options).render(&model).unwrap()
    }

    #[test]
    fn flags_stanza() {
        let out = render(
            r#"
    <bitfield name="WindowFlags" c:type="GtkWindowFlags">
      <member name="a" c:identifier="GTK_WINDOW_A" value="1"/>
      <member name="b" c:identifier="GTK_WINDOW_B" value="2"/>
    </bitfield>"#,
            EmitOptions::default(),
        );
        assert_eq!(
            out,
            r#"(define-flags-extended WindowFlags
  (in-module "Gtk")
  (c-name "GtkWindowFlags")
  (values
    '("a" "GTK_WINDOW_A" "1")
    '("b" "GTK_WINDOW_B" "2")
  )
)

"#
        );
    }

    #[test]
    fn enum_stanza_without_members() {
        let out = render(
            r#"<enumeration name="Align" c:type="GtkAlign"/>"#,
            EmitOptions::default(),
        );
        assert_eq!(
            out,
            "(define-enum-extended Align\n  (in-module \"Gtk\")\n  (c-name \"GtkAlign\")\n  (values\n  )\n)\n\n"
        );
    }

    #[test]
    fn throwing_method_gets_error_parameter() {
        let out = render(
            r#"
    <record name="Widget" c:type="GtkWidget">
      <method name="realize" c:identifier="gtk_widget_realize" throws="1">
        <return-value transfer-ownership="none"><type name="gboolean" c:type="gboolean"/></return-value>
        <parameters>
          <instance-parameter name="widget"><type name="Widget" c:type="GtkWidget*"/></instance-parameter>
        </parameters>
      </method>
    </record>"#,
            EmitOptions::default(),
        );
        assert_eq!(
            out,
            r#"(define-method realize
  (of-object "GtkWidget")
  (c-name "gtk_widget_realize")
  (return-type "gboolean")
  (parameters
    '("GError**" "error")
  )
)

"#
        );
    }

    #[test]
    fn method_by_first_parameter_lists_every_parameter() {
        let out = render(
            r#"
    <record name="Widget" c:type="GtkWidget">
      <function name="set_name" c:identifier="gtk_widget_set_name">
        <return-value><type name="none" c:type="void"/></return-value>
        <parameters>
          <parameter name="self"><type name="Widget" c:type="GtkWidget*"/></parameter>
          <parameter name="name"><type name="utf8" c:type="const gchar*"/></parameter>
        </parameters>
      </function>
    </record>"#,
            EmitOptions::default(),
        );
        assert_eq!(
            out,
            r#"(define-method set_name
  (of-object "GtkWidget")
  (c-name "gtk_widget_set_name")
  (return-type "none")
  (parameters
    '("GtkWidget*" "self")
    '("const gchar*" "name")
  )
)

"#
        );
    }

    #[test]
    fn constructor_stanza() {
        let out = render(
            r#"
    <record name="Widget" c:type="GtkWidget">
      <constructor name="new" c:identifier="gtk_widget_new">
        <return-value transfer-ownership="full"><type name="Widget" c:type="GtkWidget*"/></return-value>
        <parameters>
          <parameter name="argv"><array c:type="gchar**"><type name="utf8" c:type="gchar*"/></array></parameter>
        </parameters>
      </constructor>
    </record>"#,
            EmitOptions::default(),
        );
        assert_eq!(
            out,
            r#"(define-function gtk_widget_new
  (c-name "gtk_widget_new")
  (is-constructor-of "GtkWidget")
  (return-type "GtkWidget*")
  (parameters
    '("const-gchar**" "argv")
  )
)

"#
        );
    }

    #[test]
    fn free_functions_follow_bound_only() {
        let body = r#"
    <record name="Widget" c:type="GtkWidget">
      <function name="get_default_direction" c:identifier="gtk_widget_get_default_direction"/>
    </record>"#;

        assert_eq!(render(body, EmitOptions::default()), "");

        let all = EmitOptions {
            bound_only: false,
            ..Default::default()
        };
        assert_eq!(
            render(body, all),
            "(define-function gtk_widget_get_default_direction\n  (c-name \"gtk_widget_get_default_direction\")\n  (return-type \"void\")\n)\n\n"
        );
    }

    #[test]
    fn kinds_select_sections() {
        let body = r#"
    <enumeration name="Align" c:type="GtkAlign"/>
    <record name="Widget" c:type="GtkWidget">
      <method name="show" c:identifier="gtk_widget_show">
        <parameters><instance-parameter name="w"/></parameters>
      </method>
    </record>"#;

        let enums_only = EmitOptions {
            kinds: vec![EntityKind::Enums],
            ..Default::default()
        };
        let out = render(body, enums_only);
        assert!(out.starts_with("(define-enum-extended Align"));
        assert!(!out.contains("define-method"));

        let methods_only = EmitOptions {
            kinds: vec![EntityKind::Methods],
            ..Default::default()
        };
        let out = render(body, methods_only);
        assert!(out.starts_with("(define-method show"));
        assert!(!out.contains("define-enum"));
    }
}
