//! Python grammar

use crate::error::Result;
use crate::highlight::grammar::Grammar;
use crate::highlight::registry::LanguageId;
use crate::highlight::rules::TokenRule;
use crate::highlight::tokens::TokenClass;

use super::{number_rule, operator_rule, string_rule};

/// Build the Python grammar
pub fn python_grammar() -> Result<Grammar> {
    let keywords = r"\b(?:def|class|if|else|elif|while|for|return|import|from|as|try|except|finally|with|lambda|in|is|not|and|or|True|False|None)\b";
    let builtins = r"\b(?:print|input|len|range|str|int|float|list|dict|set|tuple|type|enumerate|zip|sum|min|max|abs)\b";

    let rules = vec![
        string_rule()?,
        TokenRule::new("comment", r"#.*", TokenClass::Comment)?,
        TokenRule::new("keyword", keywords, TokenClass::Keyword)?,
        TokenRule::new("builtin", builtins, TokenClass::Builtin)?,
        number_rule()?,
        operator_rule()?,
    ];

    Grammar::new(LanguageId::Python, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes_of(text: &str) -> Vec<(String, TokenClass)> {
        let grammar = python_grammar().unwrap();
        grammar
            .tokenize(text)
            .iter()
            .map(|f| (text[f.start..f.end].to_string(), f.class))
            .collect()
    }

    #[test]
    fn test_comment_line() {
        let got = classes_of("# def not_a_keyword");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].1, TokenClass::Comment);
    }

    #[test]
    fn test_string_before_comment_marker() {
        // A '#' inside a string does not open a comment
        let got = classes_of("\"a # b\" # real");
        assert_eq!(got[0], ("\"a # b\"".to_string(), TokenClass::String));
        assert_eq!(got.last().unwrap().1, TokenClass::Comment);
    }

    #[test]
    fn test_keywords_and_builtins() {
        let got = classes_of("def f(): return len(x)");
        let find = |t: &str| got.iter().find(|(s, _)| s == t).unwrap().1;
        assert_eq!(find("def"), TokenClass::Keyword);
        assert_eq!(find("return"), TokenClass::Keyword);
        assert_eq!(find("len"), TokenClass::Builtin);
    }

    #[test]
    fn test_identifier_containing_keyword() {
        // Word boundaries keep 'definition' out of the keyword class
        let got = classes_of("definition");
        assert_eq!(got, vec![("definition".to_string(), TokenClass::Plain)]);
    }

    #[test]
    fn test_single_quoted_string() {
        let got = classes_of("x = 'it\\'s'");
        let s = got.iter().find(|(_, c)| *c == TokenClass::String).unwrap();
        assert_eq!(s.0, "'it\\'s'");
    }

    #[test]
    fn test_number_literals() {
        let got = classes_of("a = 3.14 + 7");
        let nums: Vec<_> = got
            .iter()
            .filter(|(_, c)| *c == TokenClass::Number)
            .map(|(s, _)| s.as_str())
            .collect();
        assert_eq!(nums, vec!["3.14", "7"]);
    }
}
