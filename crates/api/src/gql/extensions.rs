//! Schema extensions contributed on top of the generated content API.
//!
//! Each extension pairs an SDL fragment describing the fields it adds with
//! per-field resolver settings. The resolvers themselves live in
//! [`crate::gql::domains`] and are merged into [`crate::gql::QueryRoot`].

use std::collections::HashMap;

pub const ARTICLE_BY_SLUG_TYPE_DEFS: &str = r#"
type Query {
  article(slug: String!): ArticleEntityResponse
}
"#;

pub const AUTHORS_CONTACTS_TYPE_DEFS: &str = r#"
type Query {
  authorsContacts: [AuthorContact]
}

type AuthorsArticles {
  id: ID
  title: String
  slug: String
  description: String
}

type AuthorContact {
  id: ID
  name: String
  email: String
  articles: [AuthorsArticles]
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    pub auth: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { auth: true }
    }
}

/// Resolver settings keyed by `"Type.field"`.
#[derive(Debug, Clone, Default)]
pub struct ResolversConfig {
    fields: HashMap<String, FieldConfig>,
}

impl ResolversConfig {
    pub fn with(mut self, field: &str, config: FieldConfig) -> Self {
        self.fields.insert(field.to_string(), config);
        self
    }

    pub fn field(&self, field: &str) -> FieldConfig {
        self.fields.get(field).copied().unwrap_or_default()
    }

    pub fn requires_auth(&self, field: &str) -> bool {
        self.field(field).auth
    }

    /// Later entries win.
    pub fn merge(&mut self, other: ResolversConfig) {
        self.fields.extend(other.fields);
    }
}

pub struct Extension {
    pub type_defs: &'static str,
    pub resolvers_config: ResolversConfig,
}

impl Extension {
    pub fn new(type_defs: &'static str) -> Self {
        Self {
            type_defs,
            resolvers_config: ResolversConfig::default(),
        }
    }

    pub fn resolver_config(mut self, field: &str, config: FieldConfig) -> Self {
        self.resolvers_config = self.resolvers_config.with(field, config);
        self
    }
}

/// Collects extensions while the schema is being built.
#[derive(Default)]
pub struct ExtensionService {
    type_defs: Vec<&'static str>,
    resolvers_config: ResolversConfig,
}

impl ExtensionService {
    pub fn use_extension(&mut self, extension: Extension) {
        self.type_defs.push(extension.type_defs);
        self.resolvers_config.merge(extension.resolvers_config);
    }

    pub fn type_defs(&self) -> &[&'static str] {
        &self.type_defs
    }

    pub fn resolvers_config(&self) -> &ResolversConfig {
        &self.resolvers_config
    }
}

/// Registration entry point, called once while the schema is built.
pub fn register(service: &mut ExtensionService) {
    service.use_extension(Extension::new(ARTICLE_BY_SLUG_TYPE_DEFS));

    service.use_extension(
        Extension::new(AUTHORS_CONTACTS_TYPE_DEFS)
            .resolver_config("Query.authorsContacts", FieldConfig { auth: false }),
    );
}
