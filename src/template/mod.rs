//! Wrapper template with named placeholders
//!
//! A template is ordinary text containing `{{name}}` placeholders. Parsing
//! splits the text into literal and placeholder segments; rendering
//! substitutes fragment contents for placeholders verbatim, with no escaping
//! and no validation of the substituted text.
//!
//! Binding placeholders by name instead of by position means the manifest
//! order and the template authoring order can differ freely; the two are
//! reconciled by [`Template::check_manifest`] before any fragment is read.

use std::collections::HashSet;

use crate::config::{FragmentSpec, is_valid_name};
use crate::error::{ModwrapError, Result};
use crate::fragment::Fragment;

/// The built-in wrapper: an AMD module definition around the five stock
/// fragments. The trailing export declaration is part of the contract of
/// the generated artifact and is kept verbatim.
pub const BUILTIN: &str = "define(function() {
    {{utils}}
    
    {{text_parser}}
    
    {{data_parser}}
    
    {{parser}}
    
    {{runtime}}

    return {
        Parser: Parser,
        Runtime: Runtime,
        Utils: Utils
    };
});
";

/// One parsed piece of a template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text into literal and placeholder segments
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }

            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                let offset = text.len() - rest.len() + start;
                return Err(ModwrapError::TemplateParseFailed {
                    reason: format!("unclosed placeholder at byte {offset}"),
                });
            };

            let name = &after[..end];
            if !is_valid_name(name) {
                return Err(ModwrapError::TemplateParseFailed {
                    reason: format!("invalid placeholder name '{name}'"),
                });
            }

            segments.push(Segment::Placeholder(name.to_string()));
            rest = &after[end + 2..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// The built-in wrapper template
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN)
    }

    /// Placeholder names in first-appearance order, without repeats
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if seen.insert(name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Verify that placeholders and manifest entries pair up exactly
    ///
    /// Every placeholder must have a manifest entry of the same name and
    /// every manifest entry must be referenced by the template. A repeated
    /// placeholder is fine; it is rendered each time it appears.
    pub fn check_manifest(&self, manifest: &[FragmentSpec]) -> Result<()> {
        let bound: HashSet<&str> = manifest.iter().map(|spec| spec.name.as_str()).collect();
        for name in self.placeholders() {
            if !bound.contains(name) {
                return Err(ModwrapError::PlaceholderUnbound {
                    name: name.to_string(),
                });
            }
        }

        let used: HashSet<&str> = self.placeholders().into_iter().collect();
        for spec in manifest {
            if !used.contains(spec.name.as_str()) {
                return Err(ModwrapError::FragmentUnused {
                    name: spec.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Substitute fragment contents into the template
    pub fn render(&self, fragments: &[Fragment]) -> Result<String> {
        let by_name: std::collections::HashMap<&str, &str> = fragments
            .iter()
            .map(|f| (f.name.as_str(), f.content.as_str()))
            .collect();

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match by_name.get(name.as_str()) {
                    Some(content) => out.push_str(content),
                    None => {
                        return Err(ModwrapError::PlaceholderUnbound { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(name: &str, content: &str) -> Fragment {
        Fragment {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("no placeholders here").unwrap();
        assert!(template.placeholders().is_empty());
        assert_eq!(template.render(&[]).unwrap(), "no placeholders here");
    }

    #[test]
    fn test_parse_placeholder_order() {
        let template = Template::parse("{{b}} and {{a}} and {{b}}").unwrap();
        assert_eq!(template.placeholders(), ["b", "a"]);
    }

    #[test]
    fn test_parse_unclosed_placeholder() {
        let err = Template::parse("start {{oops").unwrap_err();
        assert!(matches!(err, ModwrapError::TemplateParseFailed { .. }));
        assert!(err.to_string().contains("unclosed placeholder"));
    }

    #[test]
    fn test_parse_invalid_placeholder_name() {
        let err = Template::parse("{{not a name}}").unwrap_err();
        assert!(err.to_string().contains("invalid placeholder name"));

        let err = Template::parse("{{}}").unwrap_err();
        assert!(matches!(err, ModwrapError::TemplateParseFailed { .. }));
    }

    #[test]
    fn test_render_substitutes_by_name() {
        let template = Template::parse("[{{x}}|{{y}}]").unwrap();
        let out = template
            .render(&[fragment("y", "why"), fragment("x", "ex")])
            .unwrap();
        assert_eq!(out, "[ex|why]");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let template = Template::parse("{{x}}{{x}}").unwrap();
        let out = template.render(&[fragment("x", "ab")]).unwrap();
        assert_eq!(out, "abab");
    }

    #[test]
    fn test_render_unbound_placeholder() {
        let template = Template::parse("{{missing}}").unwrap();
        let err = template.render(&[]).unwrap_err();
        assert!(matches!(err, ModwrapError::PlaceholderUnbound { .. }));
    }

    #[test]
    fn test_check_manifest_exact_match() {
        let template = Template::parse("{{a}} {{b}}").unwrap();
        let manifest = [FragmentSpec::new("a", "a.js"), FragmentSpec::new("b", "b.js")];
        assert!(template.check_manifest(&manifest).is_ok());
    }

    #[test]
    fn test_check_manifest_unbound_placeholder() {
        let template = Template::parse("{{a}} {{b}}").unwrap();
        let manifest = [FragmentSpec::new("a", "a.js")];
        let err = template.check_manifest(&manifest).unwrap_err();
        assert!(matches!(err, ModwrapError::PlaceholderUnbound { name } if name == "b"));
    }

    #[test]
    fn test_check_manifest_unused_fragment() {
        let template = Template::parse("{{a}}").unwrap();
        let manifest = [FragmentSpec::new("a", "a.js"), FragmentSpec::new("b", "b.js")];
        let err = template.check_manifest(&manifest).unwrap_err();
        assert!(matches!(err, ModwrapError::FragmentUnused { name } if name == "b"));
    }

    #[test]
    fn test_builtin_placeholders() {
        let template = Template::builtin().unwrap();
        assert_eq!(
            template.placeholders(),
            ["utils", "text_parser", "data_parser", "parser", "runtime"]
        );
    }

    #[test]
    fn test_builtin_renders_wrapper() {
        let template = Template::builtin().unwrap();
        let out = template
            .render(&[
                fragment("utils", "A"),
                fragment("text_parser", "B"),
                fragment("data_parser", "C"),
                fragment("parser", "D"),
                fragment("runtime", "E"),
            ])
            .unwrap();
        assert!(out.starts_with("define(function() {\n    A\n"));
        assert!(out.contains("\n    E\n\n    return {\n"));
        assert!(out.contains("        Parser: Parser,\n"));
        assert!(out.contains("        Runtime: Runtime,\n"));
        assert!(out.contains("        Utils: Utils\n"));
        assert!(out.ends_with("});\n"));
    }
}
