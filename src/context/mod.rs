crate::reexport!(clause);
crate::reexport!(table_ref);
crate::reexport!(word);
crate::reexport!(analyzer);

use crate::sql::{Keyword, Token, TokenKind, is_keyword, tokenize};
