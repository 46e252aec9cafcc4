use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sfv_codec::{
    parse_dictionary, parse_item, parse_list, serialize_dictionary, serialize_list, BareItem,
    Item, List, ListEntry,
};

const PRIORITY: &str = "u=3, i";
const ACCEPT: &str = "text/html, application/xhtml+xml, application/xml;q=0.9, */*;q=0.8";
const SIGNATURE_INPUT: &str = r#"sig1=("@method" "@authority" "@path" "content-digest" "content-type");created=1618884473;keyid="test-key-rsa-pss""#;
const DIGEST: &str = ":X48E9qOokqqrvdts8nOJRJN3OWDUoyWxBf7kbu9DBPE=:;alg=sha-256";

fn benchmark_parse_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_headers");

    group.bench_function("priority_dictionary", |b| {
        b.iter(|| parse_dictionary(black_box(PRIORITY)))
    });

    group.bench_function("accept_list", |b| {
        b.iter(|| parse_list(black_box(ACCEPT)))
    });

    group.bench_function("signature_input_dictionary", |b| {
        b.iter(|| parse_dictionary(black_box(SIGNATURE_INPUT)))
    });

    group.bench_function("digest_item", |b| b.iter(|| parse_item(black_box(DIGEST))));

    group.finish();
}

fn benchmark_serialize_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_headers");

    let accept = parse_list(ACCEPT).unwrap();
    let signature_input = parse_dictionary(SIGNATURE_INPUT).unwrap();

    group.bench_function("accept_list", |b| {
        b.iter(|| serialize_list(black_box(&accept)))
    });

    group.bench_function("signature_input_dictionary", |b| {
        b.iter(|| serialize_dictionary(black_box(&signature_input)))
    });

    group.finish();
}

fn benchmark_list_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list_size");

    for size in [10, 50, 100, 500].iter() {
        let list: List = (0..*size)
            .map(|i| {
                ListEntry::from(Item::new(BareItem::token(format!("member{}", i))))
            })
            .collect();
        let field = serialize_list(&list).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &field, |b, field| {
            b.iter(|| parse_list(black_box(field)))
        });
    }
    group.finish();
}

fn benchmark_bare_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("bare_items");

    group.bench_function("integer", |b| {
        b.iter(|| parse_item(black_box("-999999999999999")))
    });

    group.bench_function("decimal", |b| {
        b.iter(|| parse_item(black_box("123456789012.123")))
    });

    group.bench_function("string", |b| {
        b.iter(|| parse_item(black_box(r#""a string with \"escapes\" and \\ slashes""#)))
    });

    group.bench_function("byte_sequence", |b| {
        b.iter(|| parse_item(black_box(":cHJldGVuZCB0aGlzIGlzIGJpbmFyeSBjb250ZW50Lg==:")))
    });

    group.bench_function("display_string", |b| {
        b.iter(|| parse_item(black_box(r#"%"f%c3%bc%c3%bc b%c3%a4r""#)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_headers,
    benchmark_serialize_headers,
    benchmark_list_sizes,
    benchmark_bare_items
);
criterion_main!(benches);
