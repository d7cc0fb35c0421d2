//! Creator and contributor attribution.

use crate::config::{AttributionConfig, CollapseInto};
use crate::model::Metadata;
use crate::provider::PersonDirectory;
use pleiades_graph_ir::{Graph, Term};
use pleiades_vocab::{dcterms, foaf, rdf};

/// A resolved creator or contributor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub display_name: String,
    pub profile_url: Option<String>,
}

/// Resolve a creator/contributor entry through the alias table and the
/// directory. Unknown accounts keep their (aliased) id as display name.
pub fn resolve_person(
    config: &AttributionConfig,
    directory: &dyn PersonDirectory,
    username: &str,
) -> Person {
    let account = config.account_for(username);
    match directory.lookup(account) {
        Some(member) => Person {
            display_name: member.display_name,
            profile_url: member.profile_url.filter(|u| !u.is_empty()),
        },
        None => Person {
            display_name: account.to_string(),
            profile_url: None,
        },
    }
}

/// Creator and contributor lists after collapsing double credits.
///
/// For each configured account: when it is among the creators and it, or
/// one of its aliases, is among the contributors, the duplicate is dropped
/// from the list named by `collapse_into`.
pub fn credited<'m>(
    config: &AttributionConfig,
    meta: &'m Metadata,
) -> (Vec<&'m str>, Vec<&'m str>) {
    let mut creators: Vec<&str> = meta.creators.iter().map(String::as_str).collect();
    let mut contributors: Vec<&str> = meta.contributors.iter().map(String::as_str).collect();

    for alias in &config.credit_aliases {
        let is_creator = creators.contains(&alias.account.as_str());
        let is_contributor = contributors.iter().any(|c| alias.denotes(c));
        if !(is_creator && is_contributor) {
            continue;
        }
        match config.collapse_into {
            CollapseInto::Contributors => contributors.retain(|c| !alias.denotes(c)),
            CollapseInto::Creators => {
                if let Some(pos) = creators.iter().position(|c| *c == alias.account) {
                    creators.remove(pos);
                }
            }
        }
    }
    (creators, contributors)
}

/// Emit `dcterms:creator` then `dcterms:contributor` links for `meta`.
pub fn emit_attribution(
    graph: &mut Graph,
    subject: &Term,
    meta: &Metadata,
    config: &AttributionConfig,
    directory: &dyn PersonDirectory,
) {
    let (creators, contributors) = credited(config, meta);
    for username in creators {
        emit_person(graph, subject, dcterms::CREATOR, config, directory, username);
    }
    for username in contributors {
        emit_person(graph, subject, dcterms::CONTRIBUTOR, config, directory, username);
    }
}

fn emit_person(
    graph: &mut Graph,
    subject: &Term,
    relation: &str,
    config: &AttributionConfig,
    directory: &dyn PersonDirectory,
    username: &str,
) {
    let person = resolve_person(config, directory, username);
    let node = match person.profile_url.as_deref() {
        Some(url) => Term::iri(url),
        None => graph.fresh_blank(),
    };
    graph.add_triple(subject.clone(), Term::iri(relation), node.clone());

    if person.profile_url.is_none() && !person.display_name.is_empty() {
        graph.add_triple(node.clone(), Term::iri(rdf::TYPE), Term::iri(foaf::PERSON));
        graph.add_triple(node, Term::iri(foaf::NAME), Term::string(&person.display_name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CreditAlias;
    use crate::provider::Member;

    struct Directory;

    impl PersonDirectory for Directory {
        fn lookup(&self, id: &str) -> Option<Member> {
            (id == "sgillies" || id == "thomase").then(|| Member {
                id: id.to_string(),
                display_name: format!("Member {id}"),
                profile_url: Some(format!("http://pleiades.stoa.org/author/{id}")),
            })
        }
    }

    fn meta(creators: &[&str], contributors: &[&str]) -> Metadata {
        Metadata {
            creators: creators.iter().map(|s| s.to_string()).collect(),
            contributors: contributors.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_alias_resolves_before_lookup() {
        let config = AttributionConfig::default();
        let person = resolve_person(&config, &Directory, "T. Elliott");
        assert_eq!(
            person.profile_url.as_deref(),
            Some("http://pleiades.stoa.org/author/thomase")
        );

        let stranger = resolve_person(&config, &Directory, "jbecker");
        assert_eq!(stranger.display_name, "jbecker");
        assert_eq!(stranger.profile_url, None);
    }

    #[test]
    fn test_collapse_into_contributors() {
        let config = AttributionConfig::default();
        let m = meta(&["sgillies", "thomase"], &["S. Gillies", "jbecker", "sgillies"]);
        let (creators, contributors) = credited(&config, &m);
        assert_eq!(creators, vec!["sgillies", "thomase"]);
        assert_eq!(contributors, vec!["jbecker"]);
    }

    #[test]
    fn test_collapse_into_creators_is_legacy() {
        let config = AttributionConfig {
            collapse_into: CollapseInto::Creators,
            ..Default::default()
        };
        let m = meta(&["sgillies", "thomase"], &["S. Gillies"]);
        let (creators, contributors) = credited(&config, &m);
        assert_eq!(creators, vec!["thomase"]);
        assert_eq!(contributors, vec!["S. Gillies"]);
    }

    #[test]
    fn test_no_collapse_without_both_credits() {
        let config = AttributionConfig::default();
        let m = meta(&["thomase"], &["S. Gillies"]);
        let (creators, contributors) = credited(&config, &m);
        assert_eq!(creators, vec!["thomase"]);
        assert_eq!(contributors, vec!["S. Gillies"]);
    }

    #[test]
    fn test_configured_alias_pair() {
        let config = AttributionConfig {
            credit_aliases: vec![CreditAlias {
                account: "jbecker".into(),
                aliases: vec!["J. Becker".into()],
            }],
            ..Default::default()
        };
        let m = meta(&["jbecker", "sgillies"], &["J. Becker", "S. Gillies"]);
        let (_, contributors) = credited(&config, &m);
        // sgillies is no longer configured, so its double credit stays
        assert_eq!(contributors, vec!["S. Gillies"]);
    }

    #[test]
    fn test_emit_named_and_anonymous_people() {
        let config = AttributionConfig::default();
        let subject = Term::iri("http://example.org/p");
        let mut g = Graph::new();
        emit_attribution(
            &mut g,
            &subject,
            &meta(&["thomase"], &["jbecker"]),
            &config,
            &Directory,
        );

        let expected = [
            "<http://example.org/p> <http://purl.org/dc/terms/creator> <http://pleiades.stoa.org/author/thomase> .",
            "<http://example.org/p> <http://purl.org/dc/terms/contributor> _:b1 .",
            "_:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://xmlns.com/foaf/0.1/Person> .",
            "_:b1 <http://xmlns.com/foaf/0.1/name> \"jbecker\" .",
        ];
        let lines: Vec<String> = g.iter().map(|t| t.to_string()).collect();
        assert_eq!(lines, expected);
    }
}
