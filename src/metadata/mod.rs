crate::reexport!(snapshot);
crate::reexport!(handle);
crate::reexport!(provider);

use crate::*;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
