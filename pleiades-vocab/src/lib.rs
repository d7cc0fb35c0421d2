//! RDF Vocabulary Constants for Pleiades gazetteer exports
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! when a gazetteer Place is rendered as linked data.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD datatypes used for literals
//! - `owl`, `dcterms`, `foaf`, `skos`, `prov`, `cito` - descriptive vocabularies
//! - `geo`, `osgeo`, `osspatial`, `spatial` - point, geometry and topology terms
//! - `pleiades` - the gazetteer's own place vocabulary
//! - `prefixes` - the canonical prefix bindings for an exported graph

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:seeAlso IRI
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace IRI
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
}

/// Dublin Core Terms
pub mod dcterms {
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
    pub const CONTRIBUTOR: &str = "http://purl.org/dc/terms/contributor";
    pub const COVERAGE: &str = "http://purl.org/dc/terms/coverage";
}

/// Friend of a Friend
pub mod foaf {
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";

    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    pub const PRIMARY_TOPIC_OF: &str = "http://xmlns.com/foaf/0.1/primaryTopicOf";
}

/// SKOS core vocabulary constants
pub mod skos {
    /// SKOS namespace IRI
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// skos:Concept IRI
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

    /// skos:prefLabel IRI
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";

    /// skos:altLabel IRI
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";

    /// skos:scopeNote IRI
    pub const SCOPE_NOTE: &str = "http://www.w3.org/2004/02/skos/core#scopeNote";

    /// skos:definition IRI
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
}

/// Provenance vocabulary
///
/// The namespace is the one historically published by the gazetteer
/// (the PROV-O document URL), not `http://www.w3.org/ns/prov#`.
pub mod prov {
    pub const NS: &str = "http://www.w3.org/TR/prov-o/#";

    pub const WAS_DERIVED_FROM: &str = "http://www.w3.org/TR/prov-o/#wasDerivedFrom";
}

/// Citation Typing Ontology
pub mod cito {
    pub const NS: &str = "http://purl.org/spar/cito/";

    pub const CITES_AS_RELATED: &str = "http://purl.org/spar/cito/citesAsRelated";
    pub const CITES_FOR_INFORMATION: &str = "http://purl.org/spar/cito/citesForInformation";

    /// Build a cito relation IRI from a local name
    pub fn relation(local: &str) -> String {
        format!("{NS}{local}")
    }
}

/// W3C Basic Geo (WGS84 lat/long)
pub mod geo {
    pub const NS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

    pub const LAT: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#lat";
    pub const LONG: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#long";
}

/// Ordnance Survey geometry ontology
pub mod osgeo {
    pub const NS: &str = "http://data.ordnancesurvey.co.uk/ontology/geometry/";

    pub const ABSTRACT_GEOMETRY: &str =
        "http://data.ordnancesurvey.co.uk/ontology/geometry/AbstractGeometry";
    pub const EXTENT: &str = "http://data.ordnancesurvey.co.uk/ontology/geometry/extent";
    pub const AS_GEO_JSON: &str = "http://data.ordnancesurvey.co.uk/ontology/geometry/asGeoJSON";
    pub const AS_WKT: &str = "http://data.ordnancesurvey.co.uk/ontology/geometry/asWKT";
}

/// Ordnance Survey spatial relations ontology
pub mod osspatial {
    pub const NS: &str = "http://data.ordnancesurvey.co.uk/ontology/spatialrelations/";

    pub const WITHIN: &str = "http://data.ordnancesurvey.co.uk/ontology/spatialrelations/within";
}

/// NeoGeo spatial ontology
pub mod spatial {
    pub const NS: &str = "http://geovocab.org/spatial#";

    /// spatial:Feature class IRI
    pub const FEATURE: &str = "http://geovocab.org/spatial#Feature";

    /// spatial:C (connection) IRI
    pub const C: &str = "http://geovocab.org/spatial#C";
}

/// Pleiades place vocabulary
pub mod pleiades {
    pub const NS: &str = "http://pleiades.stoa.org/places/vocab#";

    pub const PLACE: &str = "http://pleiades.stoa.org/places/vocab#Place";
    pub const NAME: &str = "http://pleiades.stoa.org/places/vocab#Name";
    pub const LOCATION: &str = "http://pleiades.stoa.org/places/vocab#Location";

    pub const HAS_NAME: &str = "http://pleiades.stoa.org/places/vocab#hasName";
    pub const HAS_LOCATION: &str = "http://pleiades.stoa.org/places/vocab#hasLocation";
    pub const HAS_FEATURE_TYPE: &str = "http://pleiades.stoa.org/places/vocab#hasFeatureType";

    pub const NAME_ATTESTED: &str = "http://pleiades.stoa.org/places/vocab#nameAttested";
    pub const NAME_ROMANIZED: &str = "http://pleiades.stoa.org/places/vocab#nameRomanized";

    pub const DURING: &str = "http://pleiades.stoa.org/places/vocab#during";
    pub const START_DATE: &str = "http://pleiades.stoa.org/places/vocab#start_date";
    pub const END_DATE: &str = "http://pleiades.stoa.org/places/vocab#end_date";
}

/// Prefix bindings attached to exported graphs
pub mod prefixes {
    use super::*;

    /// Bindings for a full place graph, in declaration order
    pub const PLACE_GRAPH: &[(&str, &str)] = &[
        ("rdf", rdf::NS),
        ("cito", cito::NS),
        ("dcterms", dcterms::NS),
        ("rdfs", rdfs::NS),
        ("spatial", spatial::NS),
        ("geo", geo::NS),
        ("foaf", foaf::NS),
        ("osgeo", osgeo::NS),
        ("osspatial", osspatial::NS),
        ("pleiades", pleiades::NS),
        ("prov", prov::NS),
        ("skos", skos::NS),
        ("owl", owl::NS),
    ];

    /// Bindings for a place-type concept graph
    pub const SKOS_GRAPH: &[(&str, &str)] = &[("skos", skos::NS)];
}
