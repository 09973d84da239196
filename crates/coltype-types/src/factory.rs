//! Data type factory
//!
//! Maps type family names (and their aliases) to creators that turn a parsed
//! argument list into a data type. A factory is populated once, usually through
//! [`DataTypeFactory::with_decimal_types`], and then shared read-only.

use crate::registration::register_data_type_decimal;
use crate::DataTypePtr;
use coltype_ast::TypeArguments;
use coltype_diagnostics::{Result, TypeError, DEC0100, DEC0104};
use coltype_parser::parse_type_declaration;
use indexmap::IndexMap;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Builds a data type from the arguments of its declaration
///
/// `None` means the declaration had no parentheses at all.
pub type Creator = Arc<dyn Fn(Option<&TypeArguments>) -> Result<DataTypePtr> + Send + Sync>;

/// Whether a registered name matches regardless of letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Sensitive,
    Insensitive,
}

/// Registry of data type families
#[derive(Default)]
pub struct DataTypeFactory {
    /// Canonical family name -> creator
    data_types: IndexMap<String, Creator>,
    /// Lowercased name -> canonical name
    case_insensitive_data_types: IndexMap<String, String>,
    /// Alias -> canonical name
    aliases: IndexMap<String, String>,
    /// Lowercased alias -> canonical name
    case_insensitive_aliases: IndexMap<String, String>,
}

impl DataTypeFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory with the decimal family registered
    pub fn with_decimal_types() -> Result<Self> {
        let mut factory = Self::new();
        register_data_type_decimal(&mut factory)?;
        Ok(factory)
    }

    /// Register a type family under `name`
    pub fn register_data_type(&mut self, name: &str, creator: Creator, case: Case) -> Result<()> {
        self.check_unused(name, case)?;
        debug!("registering data type {name} ({case:?})");
        self.data_types.insert(name.to_string(), creator);
        if case == Case::Insensitive {
            self.case_insensitive_data_types
                .insert(name.to_lowercase(), name.to_string());
        }
        Ok(())
    }

    /// Register `alias` as another name for the already registered `target`
    pub fn register_alias(&mut self, alias: &str, target: &str, case: Case) -> Result<()> {
        let canonical = match self.canonical_name(target) {
            Some(canonical) => canonical.to_string(),
            None => {
                return Err(TypeError::declaration(
                    DEC0100,
                    format!("Cannot register alias {alias}: unknown data type family {target}"),
                ));
            }
        };
        self.check_unused(alias, case)?;
        debug!("registering alias {alias} -> {canonical} ({case:?})");
        self.aliases.insert(alias.to_string(), canonical.clone());
        if case == Case::Insensitive {
            self.case_insensitive_aliases.insert(alias.to_lowercase(), canonical);
        }
        Ok(())
    }

    fn check_unused(&self, name: &str, case: Case) -> Result<()> {
        // A case-insensitive name claims every spelling of itself
        let lower = name.to_lowercase();
        let taken = self.data_types.contains_key(name)
            || self.aliases.contains_key(name)
            || self.case_insensitive_data_types.contains_key(&lower)
            || self.case_insensitive_aliases.contains_key(&lower)
            || (case == Case::Insensitive
                && self
                    .data_types
                    .keys()
                    .chain(self.aliases.keys())
                    .any(|existing| existing.to_lowercase() == lower));
        if taken {
            return Err(TypeError::declaration(
                DEC0104,
                format!("Data type family {name} is already registered"),
            ));
        }
        Ok(())
    }

    /// Resolve a family name or alias to the registered family name
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        if let Some((canonical, _)) = self.data_types.get_key_value(name) {
            return Some(canonical);
        }
        if let Some(canonical) = self.aliases.get(name) {
            return Some(canonical);
        }
        let lower = name.to_lowercase();
        self.case_insensitive_data_types
            .get(&lower)
            .or_else(|| self.case_insensitive_aliases.get(&lower))
            .map(String::as_str)
    }

    /// The creator registered for `name`, following aliases
    pub fn creator(&self, name: &str) -> Result<&Creator> {
        self.canonical_name(name)
            .and_then(|canonical| self.data_types.get(canonical))
            .ok_or_else(|| {
                TypeError::declaration(DEC0100, format!("Unknown data type family: {name}"))
            })
    }

    /// Build a type from a family name and its parsed arguments
    pub fn get_with_arguments(
        &self,
        name: &str,
        arguments: Option<&TypeArguments>,
    ) -> Result<DataTypePtr> {
        let creator = self.creator(name)?;
        debug!(
            "resolved {name} to {}",
            self.canonical_name(name).unwrap_or(name)
        );
        creator(arguments)
    }

    /// Build a type from declaration text such as `Decimal(10, 2)`
    pub fn get(&self, declaration: &str) -> Result<DataTypePtr> {
        let parsed = parse_type_declaration(declaration)?;
        self.get_with_arguments(parsed.family_name(), parsed.arguments.as_ref())
            .map_err(|e| e.with_context(declaration.trim()))
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
            || self.case_insensitive_aliases.contains_key(&name.to_lowercase())
    }

    /// Family names in registration order
    pub fn registered_names(&self) -> impl Iterator<Item = &str> {
        self.data_types.keys().map(String::as_str)
    }

    /// `(alias, canonical name)` pairs in registration order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }
}

impl fmt::Debug for DataTypeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTypeFactory")
            .field("data_types", &self.data_types.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .finish()
    }
}
