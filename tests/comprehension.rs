use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vocab_rank::report::write_json;
use vocab_rank::{FrequencyTable, ResultEntry, SimpleNormalizer, analyze_text, analyze_tokens, rank};

fn random_tokens(rng: &mut StdRng) -> Vec<String> {
    let len = rng.random_range(1..400);
    let vocab = rng.random_range(1..60);
    (0..len)
        .map(|_| format!("w{}", rng.random_range(0..vocab)))
        .collect()
}

fn to_json(entries: &[ResultEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    write_json(&mut out, entries, None, false).unwrap();
    out
}

#[test]
fn random_sequences_hold_the_ranking_invariants() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..200 {
        let tokens = random_tokens(&mut rng);
        let table = FrequencyTable::from_tokens(&tokens);
        let entries = rank(&table);

        let total: u64 = entries.iter().map(|e| e.frequency).sum();
        assert_eq!(total, tokens.len() as u64);
        assert_eq!(entries.len(), table.distinct());

        for pair in entries.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
            assert!(pair[0].cumulative_comprehension <= pair[1].cumulative_comprehension);
            if pair[0].frequency == pair[1].frequency {
                assert!(table.first_seen(&pair[0].word) < table.first_seen(&pair[1].word));
            }
        }

        let last = entries.last().unwrap();
        assert_eq!(last.cumulative_comprehension, 100.0);
    }
}

#[test]
fn parallel_and_sequential_rankings_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let tokens = random_tokens(&mut rng);
        let chunk_size = rng.random_range(1..64);
        let sequential = rank(&FrequencyTable::from_tokens(&tokens));
        let parallel = rank(&FrequencyTable::from_tokens_par(&tokens, chunk_size).unwrap());
        assert_eq!(to_json(&sequential), to_json(&parallel));
    }
}

#[test]
fn reruns_are_byte_identical() {
    let tokens = ["sol", "luna", "sol", "estrella", "luna", "sol", "mar", "mar"];
    assert_eq!(to_json(&analyze_tokens(tokens)), to_json(&analyze_tokens(tokens)));
}

#[test]
fn top_k_follows_the_ranking() {
    let tokens = ["a", "b", "a", "b", "c"];
    let entries = analyze_tokens(tokens);
    let top: Vec<(&str, u64)> = entries[..2]
        .iter()
        .map(|e| (e.word.as_str(), e.frequency))
        .collect();
    assert_eq!(top, vec![("a", 2), ("b", 2)]);
    assert_eq!(entries[2].word, "c");
    assert_eq!(entries[2].frequency, 1);
}

#[test]
fn empty_input_ranks_to_nothing() {
    assert!(analyze_tokens(Vec::<String>::new()).is_empty());
    assert!(analyze_text("  ¡¿...?! ", &SimpleNormalizer::new()).is_empty());
}

#[test]
fn text_end_to_end() {
    let text = "El sol sale. La luna brilla, el sol calienta; el SOL.";
    let normalizer = SimpleNormalizer::new().with_stop_words(["el", "la"]);
    let entries = analyze_text(text, &normalizer);
    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["sol", "sale", "luna", "brilla", "calienta"]);
    assert_eq!(entries[0].frequency, 3);
    assert_eq!(entries[0].percentage, 42.86);
    assert_eq!(entries[1].cumulative_comprehension, 57.14);
}
