use serde::Serialize;

use crate::{
    error::SymbolError,
    tables::{DefinitionTable, UsageTable},
};

/// One assembly source file and the symbol tables built from it.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSource {
    name: String,
    #[serde(skip)]
    lines: Vec<String>,
    pub(crate) definitions: DefinitionTable,
    pub(crate) usages: UsageTable,
    #[serde(skip)]
    pub(crate) issues: Vec<SymbolError>,
}

impl ModuleSource {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self::from_lines(name, text.lines().map(str::to_owned).collect())
    }

    pub fn from_lines(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
            definitions: DefinitionTable::new(),
            usages: UsageTable::new(),
            issues: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, line_no: usize) -> Option<&str> {
        self.lines.get(line_no).map(String::as_str)
    }

    pub fn definitions(&self) -> &DefinitionTable {
        &self.definitions
    }

    pub fn usages(&self) -> &UsageTable {
        &self.usages
    }

    /// Problems recorded by the last zeroth pass over this module.
    pub fn issues(&self) -> &[SymbolError] {
        &self.issues
    }
}

/// The modules of one assembler invocation, in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct AssemblyJob {
    modules: Vec<ModuleSource>,
}

impl AssemblyJob {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, module: ModuleSource) {
        self.modules.push(module);
    }

    pub fn modules(&self) -> &[ModuleSource] {
        &self.modules
    }

    pub(crate) fn modules_mut(&mut self) -> &mut [ModuleSource] {
        &mut self.modules
    }

    pub fn module(&self, index: usize) -> Option<&ModuleSource> {
        self.modules.get(index)
    }

    pub fn module_by_name(&self, name: &str) -> Option<&ModuleSource> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl FromIterator<ModuleSource> for AssemblyJob {
    fn from_iter<I: IntoIterator<Item = ModuleSource>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}
