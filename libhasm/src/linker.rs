use indexmap::{map::Entry, IndexMap};
use log::debug;
use serde::Serialize;

use crate::{error::LinkError, module::ModuleSource, tables::symbol_key};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalDefinition {
    pub module: String,
    pub line: usize,
    pub offset: usize,
}

/// Definitions of every module of a job, merged into one namespace.
///
/// Keyed by upper-cased name, so lookups ignore ASCII case.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GlobalSymbols {
    symbols: IndexMap<String, GlobalDefinition>,
}

impl GlobalSymbols {
    pub fn get(&self, symbol: &str) -> Option<&GlobalDefinition> {
        self.symbols.get(&symbol_key(symbol))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GlobalDefinition)> {
        self.symbols.iter().map(|(name, def)| (name.as_str(), def))
    }
}

/// Merge the tables of already scanned modules.
///
/// `EXTERN` declarations don't define anything; their symbol has to come from
/// another module.
///
/// # Errors
///
/// If two modules define the same symbol, or a module uses a symbol that no
/// module defines. The first problem in module order is reported.
pub fn link(modules: &[ModuleSource]) -> Result<GlobalSymbols, LinkError> {
    let mut globals = GlobalSymbols::default();

    for module in modules {
        for def in module.definitions().iter().filter(|def| !def.external) {
            match globals.symbols.entry(symbol_key(&def.symbol)) {
                Entry::Occupied(existing) => {
                    return Err(LinkError::MultiplyDefined {
                        symbol: def.symbol.clone(),
                        first: existing.get().module.clone(),
                        second: module.name().to_owned(),
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(GlobalDefinition {
                        module: module.name().to_owned(),
                        line: def.line,
                        offset: def.offset,
                    });
                }
            }
        }
    }

    for module in modules {
        for (key, usages) in module.usages().iter() {
            if globals.symbols.contains_key(key) {
                continue;
            }
            if let Some(usage) = usages.first() {
                return Err(LinkError::Undefined {
                    symbol: usage.symbol.clone(),
                    module: module.name().to_owned(),
                    line: usage.line,
                    offset: usage.offset,
                });
            }
        }
    }

    debug!("linked {} modules, {} symbols", modules.len(), globals.len());

    Ok(globals)
}
