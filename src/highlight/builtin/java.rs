//! Java grammar

use crate::error::Result;
use crate::highlight::grammar::Grammar;
use crate::highlight::registry::LanguageId;
use crate::highlight::rules::TokenRule;
use crate::highlight::tokens::TokenClass;

use super::{c_family_comment_rule, number_rule, operator_rule, string_rule};

/// Build the Java grammar
pub fn java_grammar() -> Result<Grammar> {
    let keywords = r"\b(?:public|protected|private|static|final|class|interface|enum|extends|implements|package|import|new|return|if|else|switch|case|default|while|do|for|break|continue|try|catch|finally|throw|throws|abstract|native|volatile|transient|synchronized|strictfp|instanceof)\b";
    let types = r"\b(?:int|long|short|byte|float|double|boolean|char|void|String|Integer|Double|Boolean|List|Map|Set)\b";
    let builtins = r"\b(?:System\.out\.print(?:ln|f)?|Scanner\.next(?:Int|Line)?|Math\.\w+|Arrays\.\w+)\b";

    let rules = vec![
        string_rule()?,
        c_family_comment_rule()?,
        TokenRule::new("keyword", keywords, TokenClass::Keyword)?,
        TokenRule::new("type", types, TokenClass::Type)?,
        TokenRule::new("builtin", builtins, TokenClass::Builtin)?,
        number_rule()?,
        operator_rule()?,
    ];

    Grammar::new(LanguageId::Java, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes_of(text: &str) -> Vec<(String, TokenClass)> {
        let grammar = java_grammar().unwrap();
        grammar
            .tokenize(text)
            .iter()
            .map(|f| (text[f.start..f.end].to_string(), f.class))
            .collect()
    }

    #[test]
    fn test_line_comment_over_keyword() {
        let got = classes_of("// if (x) {}");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].1, TokenClass::Comment);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let got = classes_of("a /* one\ntwo */ b");
        let comment = got.iter().find(|(_, c)| *c == TokenClass::Comment).unwrap();
        assert_eq!(comment.0, "/* one\ntwo */");
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let got = classes_of("int x; /* open\nstill open");
        assert_eq!(got.last().unwrap().1, TokenClass::Comment);
        assert!(got.last().unwrap().0.ends_with("still open"));
    }

    #[test]
    fn test_types_and_keywords_separate() {
        let got = classes_of("public static int main");
        let find = |t: &str| got.iter().find(|(s, _)| s == t).unwrap().1;
        assert_eq!(find("public"), TokenClass::Keyword);
        assert_eq!(find("static"), TokenClass::Keyword);
        assert_eq!(find("int"), TokenClass::Type);
    }

    #[test]
    fn test_string_type_name() {
        let got = classes_of("String s;");
        assert_eq!(got[0], ("String".to_string(), TokenClass::Type));
    }

    #[test]
    fn test_stdlib_call_patterns() {
        let got = classes_of("System.out.println(Math.abs(-1));");
        let builtins: Vec<_> = got
            .iter()
            .filter(|(_, c)| *c == TokenClass::Builtin)
            .map(|(s, _)| s.as_str())
            .collect();
        assert_eq!(builtins, vec!["System.out.println", "Math.abs"]);
    }

    #[test]
    fn test_char_literal_is_string_class() {
        let got = classes_of("char c = 'a';");
        let lit = got.iter().find(|(s, _)| s == "'a'").unwrap();
        assert_eq!(lit.1, TokenClass::String);
    }
}
