//! RDF Vocabulary Constants for the Spindle aggregation engine
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! by the rulebase compiler and the proxy aggregation engine.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `olo` - Ordered List Ontology (http://purl.org/ontology/olo/core#)
//! - `dcterms` - Dublin Core terms (http://purl.org/dc/terms/)
//! - `geo` - WGS84 geo positioning (http://www.w3.org/2003/01/geo/wgs84_pos#)
//! - `spindle` - the rulebase vocabulary (http://bbcarchdev.github.io/ns/spindle#)

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:Literal IRI
    pub const LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";

    /// rdfs:Resource IRI
    pub const RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:short IRI
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";

    /// xsd:byte IRI
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";

    /// xsd:unsignedLong IRI
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";

    /// xsd:unsignedInt IRI
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";

    /// xsd:unsignedShort IRI
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";

    /// xsd:unsignedByte IRI
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:positiveInteger IRI
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";

    /// xsd:nonPositiveInteger IRI
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";

    /// xsd:negativeInteger IRI
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";

    // ========================================================================
    // Datatype Classification Helpers
    // ========================================================================

    /// Check if a datatype IRI is an integer-family type
    ///
    /// These are the XSD integer subtypes that satisfy an `xsd:decimal`
    /// expectation after coercion. `xsd:decimal` itself is not a member.
    #[inline]
    pub fn is_integer_family(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            INTEGER
                | LONG
                | INT
                | SHORT
                | BYTE
                | UNSIGNED_LONG
                | UNSIGNED_INT
                | UNSIGNED_SHORT
                | UNSIGNED_BYTE
                | NON_NEGATIVE_INTEGER
                | POSITIVE_INTEGER
                | NON_POSITIVE_INTEGER
                | NEGATIVE_INTEGER
        )
    }
}

/// OWL vocabulary constants
pub mod owl {
    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
}

/// Ordered List Ontology constants
pub mod olo {
    /// olo:index IRI
    ///
    /// Used by the rulebase vocabulary to assign scores to class and
    /// predicate rules and priorities to match entries.
    pub const INDEX: &str = "http://purl.org/ontology/olo/core#index";
}

/// Dublin Core terms constants
pub mod dcterms {
    /// dcterms:description IRI
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}

/// WGS84 geo positioning constants
pub mod geo {
    /// geo:lat IRI
    pub const LAT: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#lat";

    /// geo:long IRI
    pub const LONG: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#long";
}

/// Spindle rulebase vocabulary constants
///
/// The controlled vocabulary a rulebase document is written in. The compiler
/// recognizes exactly these predicates and class IRIs; anything else in a
/// rule graph is ignored.
pub mod spindle {
    /// Spindle namespace IRI
    pub const NS: &str = "http://bbcarchdev.github.io/ns/spindle#";

    /// spindle:Class IRI
    pub const CLASS: &str = "http://bbcarchdev.github.io/ns/spindle#Class";

    /// spindle:Property IRI
    pub const PROPERTY_CLASS: &str = "http://bbcarchdev.github.io/ns/spindle#Property";

    /// spindle:expressedAs IRI
    pub const EXPRESSED_AS: &str = "http://bbcarchdev.github.io/ns/spindle#expressedAs";

    /// spindle:prominence IRI
    pub const PROMINENCE: &str = "http://bbcarchdev.github.io/ns/spindle#prominence";

    /// spindle:expect IRI
    pub const EXPECT: &str = "http://bbcarchdev.github.io/ns/spindle#expect";

    /// spindle:expectType IRI
    pub const EXPECT_TYPE: &str = "http://bbcarchdev.github.io/ns/spindle#expectType";

    /// spindle:proxyOnly IRI
    pub const PROXY_ONLY: &str = "http://bbcarchdev.github.io/ns/spindle#proxyOnly";

    /// spindle:indexed IRI
    pub const INDEXED: &str = "http://bbcarchdev.github.io/ns/spindle#indexed";

    /// spindle:inverse IRI
    pub const INVERSE: &str = "http://bbcarchdev.github.io/ns/spindle#inverse";

    /// spindle:property IRI
    pub const PROPERTY: &str = "http://bbcarchdev.github.io/ns/spindle#property";

    /// spindle:inverseProperty IRI
    pub const INVERSE_PROPERTY: &str = "http://bbcarchdev.github.io/ns/spindle#inverseProperty";

    /// spindle:coref IRI
    pub const COREF: &str = "http://bbcarchdev.github.io/ns/spindle#coref";

    /// spindle:resourceMatch IRI
    ///
    /// Well-known co-reference match type: a directly-asserted equivalence
    /// between two resource URIs.
    pub const RESOURCE_MATCH: &str = "http://bbcarchdev.github.io/ns/spindle#resourceMatch";

    /// spindle:wikipediaMatch IRI
    ///
    /// Well-known co-reference match type: equivalence via a shared
    /// Wikipedia page reference.
    pub const WIKIPEDIA_MATCH: &str = "http://bbcarchdev.github.io/ns/spindle#wikipediaMatch";
}
