use trustyuri_canonical::rdf::{normalize, nquads, serialize, BlankNodeMap, BlankId, PLACEHOLDER};
use trustyuri_canonical::{Canonicalizer, Digest, Graph, Quad, Term};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const AUTO_A: &str = "N2b80343001e94f48bdee0901be566ebb";
const AUTO_B: &str = "N0f1e2d3c4b5a69788796a5b4c3d2e1f0";
const AUTO_C: &str = "N9a8b7c6d5e4f30211203f4e5d6c7b8a9";
const TEMP_BASE: &str = "http://purl.org/nanopub/temp/np1#";

fn ex(local: &str) -> Term {
    Term::iri(format!("https://example.org/ns#{local}"))
}

/// Renames blank nodes according to `(from, to)` pairs.
fn relabel(graph: &Graph, pairs: &[(&str, &str)]) -> Graph {
    let rename = |term: &Term| match term.as_blank() {
        Some(id) => pairs
            .iter()
            .find(|(from, _)| *from == id.as_str())
            .map_or_else(|| term.clone(), |(_, to)| Term::blank(to)),
        None => term.clone(),
    };
    graph
        .iter()
        .map(|quad| {
            Quad::new(
                quad.graph.clone(),
                rename(&quad.subject),
                quad.predicate.clone(),
                rename(&quad.object),
            )
        })
        .collect()
}

fn sample_graph() -> Graph {
    let head = Term::iri("http://purl.org/nanopub/temp/np1#Head");
    let np = Term::iri("http://purl.org/nanopub/temp/np1");
    let assertion = Term::iri("http://purl.org/nanopub/temp/np1#assertion");
    vec![
        Quad::new(Some(head.clone()), np.clone(), Term::iri(RDF_TYPE), ex("Nanopublication")),
        Quad::new(Some(head), np, ex("hasAssertion"), assertion.clone()),
        Quad::new(Some(assertion.clone()), Term::blank(AUTO_A), ex("label"), Term::string("first")),
        Quad::new(Some(assertion.clone()), Term::blank(AUTO_A), ex("next"), Term::blank(AUTO_B)),
        Quad::new(Some(assertion), Term::blank(AUTO_B), ex("label"), Term::string("second")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn concrete_scenario_is_stable() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [Quad::triple(
        Term::iri("https://example.org/np/"),
        Term::iri(RDF_TYPE),
        ex("Thing"),
    )]
    .into_iter()
    .collect();

    let first = canonicalizer.canonicalize(&graph, "https://example.org/np/");
    let expected = format!(
        "<https://example.org/np/{PLACEHOLDER}> <{RDF_TYPE}> <https://example.org/ns#Thing> .\n"
    );
    assert_eq!(String::from_utf8(first.bytes.clone()).unwrap(), expected);

    let second = canonicalizer.canonicalize(&graph, "https://example.org/np/");
    assert_eq!(first.bytes, second.bytes);

    let code = format!("RA{}", Digest::compute(&first.bytes));
    let minted = canonicalizer.transform(&graph, "https://example.org/np/", &code);
    assert_eq!(
        minted.quads()[0].subject,
        Term::iri(format!("https://example.org/np/{code}"))
    );
}

#[test]
fn statement_order_does_not_matter() {
    let canonicalizer = Canonicalizer::default();
    let graph = sample_graph();
    let reversed: Graph = graph.quads().iter().rev().cloned().collect();

    let a = canonicalizer.canonicalize(&graph, TEMP_BASE);
    let b = canonicalizer.canonicalize(&reversed, TEMP_BASE);
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(Digest::compute(&a.bytes), Digest::compute(&b.bytes));
}

#[test]
fn duplicates_collapse() {
    let canonicalizer = Canonicalizer::default();
    let graph = sample_graph();
    let mut doubled = graph.clone();
    doubled.extend(graph.quads().iter().cloned());

    let a = canonicalizer.canonicalize(&graph, TEMP_BASE);
    let b = canonicalizer.canonicalize(&doubled, TEMP_BASE);
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.quad_count, 5);
}

#[test]
fn generated_blank_labels_are_renumbered() {
    let canonicalizer = Canonicalizer::default();
    let graph = sample_graph();
    let relabelled: Graph = graph
        .iter()
        .map(|quad| {
            let swap = |term: &Term| match term.as_blank().map(BlankId::as_str) {
                Some(AUTO_A) => Term::blank(AUTO_B),
                Some(AUTO_B) => Term::blank(AUTO_A),
                _ => term.clone(),
            };
            Quad::new(
                quad.graph.clone(),
                swap(&quad.subject),
                quad.predicate.clone(),
                swap(&quad.object),
            )
        })
        .collect();

    let a = canonicalizer.canonicalize(&graph, TEMP_BASE);
    let b = canonicalizer.canonicalize(&relabelled, TEMP_BASE);
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.blank_nodes, 2);

    let text = String::from_utf8(a.bytes).unwrap();
    assert!(text.contains("<http://purl.org/np/ #_1>"));
    assert!(text.contains("<http://purl.org/np/ #_2>"));
    assert!(!text.contains(AUTO_A));
}

#[test]
fn blank_nodes_with_equal_shape_are_numbered_by_their_statements() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [
        Quad::triple(Term::blank(AUTO_A), ex("p"), Term::string("x")),
        Quad::triple(Term::blank(AUTO_B), ex("p"), Term::string("x")),
        Quad::triple(Term::blank(AUTO_A), ex("q"), Term::string("1")),
        Quad::triple(Term::blank(AUTO_B), ex("q"), Term::string("2")),
    ]
    .into_iter()
    .collect();
    let swapped = relabel(&graph, &[(AUTO_A, AUTO_B), (AUTO_B, AUTO_A)]);

    let a = canonicalizer.canonicalize(&graph, TEMP_BASE);
    let b = canonicalizer.canonicalize(&swapped, TEMP_BASE);
    assert_eq!(
        String::from_utf8(a.bytes).unwrap(),
        String::from_utf8(b.bytes).unwrap()
    );
    assert_eq!(a.blank_nodes, 2);
}

#[test]
fn blank_chain_is_stable_under_every_relabelling() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [
        Quad::triple(Term::blank(AUTO_A), ex("next"), Term::blank(AUTO_B)),
        Quad::triple(Term::blank(AUTO_B), ex("next"), Term::blank(AUTO_C)),
        Quad::triple(ex("list"), ex("first"), Term::blank(AUTO_A)),
    ]
    .into_iter()
    .collect();
    let expected = canonicalizer.canonicalize(&graph, TEMP_BASE).bytes;

    let labels = [AUTO_A, AUTO_B, AUTO_C];
    let orders = [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for order in orders {
        let pairs: Vec<(&str, &str)> = labels
            .iter()
            .zip(order)
            .map(|(from, to)| (*from, labels[to]))
            .collect();
        let relabelled = relabel(&graph, &pairs);
        assert_eq!(
            canonicalizer.canonicalize(&relabelled, TEMP_BASE).bytes,
            expected,
            "{order:?}"
        );
    }
}

#[test]
fn interchangeable_blank_nodes_give_one_form() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [
        Quad::triple(Term::blank(AUTO_A), ex("p"), Term::string("x")),
        Quad::triple(Term::blank(AUTO_B), ex("p"), Term::string("x")),
    ]
    .into_iter()
    .collect();
    let swapped = relabel(&graph, &[(AUTO_A, AUTO_B), (AUTO_B, AUTO_A)]);

    let a = canonicalizer.canonicalize(&graph, TEMP_BASE);
    let b = canonicalizer.canonicalize(&swapped, TEMP_BASE);
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.quad_count, 2);
    assert_eq!(a.blank_nodes, 2);
}

#[test]
fn named_blank_nodes_keep_their_label() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [Quad::triple(Term::blank("author"), ex("name"), Term::string("Ada"))]
        .into_iter()
        .collect();
    let rewritten = canonicalizer.transform(&graph, TEMP_BASE, "RAcode");
    assert_eq!(
        rewritten.quads()[0].subject,
        Term::iri("http://purl.org/np/RAcode#_author")
    );
}

#[test]
fn temporary_base_becomes_publication_prefix() {
    let canonicalizer = Canonicalizer::default();
    let code = "RA0123456789012345678901234567890123456789012";
    let rewritten = canonicalizer.transform(&sample_graph(), TEMP_BASE, code);

    let written = nquads::write(&rewritten);
    assert!(!written.contains("http://purl.org/nanopub/temp/"));
    assert!(written.contains(&format!("<http://purl.org/np/{code}>")));
    assert!(written.contains(&format!("<http://purl.org/np/{code}#assertion>")));
    assert!(written.contains(&format!("<http://purl.org/np/{code}#Head>")));
}

#[test]
fn external_references_and_literals_are_untouched() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [
        Quad::triple(ex("a"), ex("b"), ex("c")),
        Quad::triple(
            ex("a"),
            ex("comment"),
            Term::string("see http://purl.org/nanopub/temp/np1#assertion"),
        ),
    ]
    .into_iter()
    .collect();

    let rewritten = canonicalizer.transform(&graph, TEMP_BASE, "RAcode");
    let mut expected = graph.clone();
    expected.dedupe();
    assert_eq!(rewritten, expected);
}

#[test]
fn non_temporary_base_keeps_its_parent_path() {
    let canonicalizer = Canonicalizer::default();
    let ctx = canonicalizer.context("https://example.org/np/draft/");
    assert_eq!(ctx.root(), "https://example.org/np/draft");
    assert_eq!(ctx.prefix(), "https://example.org/np/draft/");

    let ctx = canonicalizer.context("https://example.org/np/draft#");
    assert_eq!(ctx.root(), "https://example.org/np/draft");
    assert_eq!(ctx.prefix(), "https://example.org/np/");
    assert_eq!(
        ctx.rewrite_iri("https://example.org/np/draft", "RAx"),
        "https://example.org/np/RAx"
    );
    assert_eq!(
        ctx.rewrite_iri("https://example.org/np/draft#", "RAx"),
        "https://example.org/np/RAx"
    );
    assert_eq!(
        ctx.rewrite_iri("https://example.org/np/draft#pubinfo", "RAx"),
        "https://example.org/np/RAx#pubinfo"
    );
}

#[test]
fn graph_names_that_are_not_iris_are_dropped() {
    let canonicalizer = Canonicalizer::default();
    let graph: Graph = [Quad::new(Some(Term::blank("g")), ex("a"), ex("b"), ex("c"))]
        .into_iter()
        .collect();
    let rewritten = canonicalizer.transform(&graph, TEMP_BASE, "RAx");
    assert_eq!(rewritten.quads()[0].graph, None);
}

#[test]
fn empty_graph_has_empty_canonical_form() {
    let canonicalizer = Canonicalizer::default();
    let result = canonicalizer.canonicalize(&Graph::new(), TEMP_BASE);
    assert!(result.bytes.is_empty());
    assert_eq!(Digest::compute(&result.bytes), Digest::compute(b""));
}

#[test]
fn normalizing_a_minted_graph_restores_the_hashed_form() {
    let canonicalizer = Canonicalizer::default();
    let graph = sample_graph();
    let hashed = canonicalizer.canonicalize(&graph, TEMP_BASE).bytes;
    let code = format!("RA{}", Digest::compute(&hashed));

    let minted = canonicalizer.transform(&graph, TEMP_BASE, &code);
    assert_eq!(serialize(&normalize(&minted, &code)), hashed);
}

#[test]
fn normalize_leaves_literals_alone() {
    let graph: Graph = [Quad::triple(ex("a"), ex("note"), Term::string("RAcode"))]
        .into_iter()
        .collect();
    assert_eq!(normalize(&graph, "RAcode"), graph);
}

#[test]
fn blank_node_map_numbers_in_first_seen_order() {
    let mut map = BlankNodeMap::new();
    assert!(map.is_empty());
    assert_eq!(map.number(&BlankId::new("x")), 1);
    assert_eq!(map.number(&BlankId::new("y")), 2);
    assert_eq!(map.number(&BlankId::new("x")), 1);
    assert_eq!(map.len(), 2);
}
