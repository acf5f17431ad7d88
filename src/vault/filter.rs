use crate::vault::models::Category;

/// Narrows which items an `op item` command sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Only items in this vault (name or id).
    Vault(String),
    /// Only items in these categories.
    Categories(Vec<Category>),
    /// Only items carrying these tags.
    Tags(Vec<String>),
    Favorite,
    /// Include archived items.
    IncludeArchive,
}

impl Filter {
    /// Command-line flags for this filter; empty when the filter is a no-op.
    pub fn args(&self) -> Vec<String> {
        match self {
            Filter::Vault(name) if name.is_empty() => Vec::new(),
            Filter::Vault(name) => vec!["--vault".into(), name.clone()],
            Filter::Categories(cats) if cats.is_empty() => Vec::new(),
            Filter::Categories(cats) => {
                let joined = cats.iter().map(Category::as_str).collect::<Vec<_>>().join(",");
                vec!["--categories".into(), joined]
            }
            Filter::Tags(tags) if tags.is_empty() => Vec::new(),
            Filter::Tags(tags) => vec!["--tags".into(), tags.join(",")],
            Filter::Favorite => vec!["--favorite".into()],
            Filter::IncludeArchive => vec!["--include-archive".into()],
        }
    }
}

pub fn apply_filters(cmd: &mut Vec<String>, filters: &[Filter]) {
    for f in filters {
        cmd.extend(f.args());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_filter() {
        assert!(Filter::Vault(String::new()).args().is_empty());
        assert_eq!(Filter::Vault("foo".into()).args(), ["--vault", "foo"]);
    }

    #[test]
    fn categories_filter() {
        assert!(Filter::Categories(vec![]).args().is_empty());
        assert_eq!(
            Filter::Categories(vec![Category::ApiCredential]).args(),
            ["--categories", "API Credential"]
        );
        assert_eq!(
            Filter::Categories(vec![Category::ApiCredential, Category::Login]).args(),
            ["--categories", "API Credential,Login"]
        );
    }

    #[test]
    fn tags_filter() {
        assert!(Filter::Tags(vec![]).args().is_empty());
        assert_eq!(
            Filter::Tags(vec!["foo".into(), "bar baz".into()]).args(),
            ["--tags", "foo,bar baz"]
        );
    }

    #[test]
    fn flag_filters() {
        assert_eq!(Filter::Favorite.args(), ["--favorite"]);
        assert_eq!(Filter::IncludeArchive.args(), ["--include-archive"]);
    }

    #[test]
    fn apply_appends_in_order() {
        let mut cmd = vec!["item".to_string(), "list".to_string()];
        apply_filters(
            &mut cmd,
            &[
                Filter::Vault(String::new()),
                Filter::Categories(vec![Category::ApiCredential]),
                Filter::Vault("Work".into()),
            ],
        );
        assert_eq!(
            cmd,
            ["item", "list", "--categories", "API Credential", "--vault", "Work"]
        );
    }
}
