//! C++ grammar

use crate::error::Result;
use crate::highlight::grammar::Grammar;
use crate::highlight::registry::LanguageId;
use crate::highlight::rules::TokenRule;
use crate::highlight::tokens::TokenClass;

use super::{c_family_comment_rule, number_rule, operator_rule, string_rule};

/// Build the C++ grammar
pub fn cpp_grammar() -> Result<Grammar> {
    // Declaration and control-flow keywords in one rule
    let keywords = r"\b(?:int|long|short|float|double|bool|char|void|string|auto|const|static|unsigned|signed|struct|class|enum|union|namespace|using|public|private|protected|virtual|override|final|template|typename|friend|inline|extern|volatile|explicit|concept|requires|if|else|switch|case|default|while|do|for|break|continue|return|try|catch|throw|new|delete|sizeof|typeid|operator|this)\b";
    let builtins = r"\b(?:cout|cin|cerr|printf|scanf|std|vector|map|set|unordered_map|unordered_set|queue|stack|priority_queue|bitset|algorithm|cmath|iostream)\b";
    let preprocessor = r"#(?:include|define|ifdef|ifndef|endif|pragma)\b";

    let rules = vec![
        string_rule()?,
        c_family_comment_rule()?,
        TokenRule::new("preprocessor", preprocessor, TokenClass::Preprocessor)?,
        TokenRule::new("keyword", keywords, TokenClass::Keyword)?,
        TokenRule::new("builtin", builtins, TokenClass::Builtin)?,
        number_rule()?,
        operator_rule()?,
    ];

    Grammar::new(LanguageId::Cpp, rules)
}
