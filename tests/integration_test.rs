use mojitok::corpus::{parse_json_lines, parse_lines, GeneratorStats};
use mojitok::engine::{load_corpus, WordGeneratorConfig};
use mojitok::{MojitokError, WordGenerator};
use std::fs::{self, File};
use std::io::Write;

#[test]
fn end_to_end_corpus() {
    let test_file = "test_e2e_corpus.txt";
    let content = "Hello World!\nDobrý den, jak se máš?\n\nI <3 you :-) #love\n";

    let mut file = File::create(test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let loaded = load_corpus(test_file).expect("Should load corpus successfully");
    let sentences = parse_lines(&loaded);
    assert_eq!(sentences.len(), 3);

    let generator = WordGenerator::new(sentences, false);
    let mut pass = generator.iter();
    let words: Vec<Vec<String>> = pass.by_ref().map(|r| r.unwrap().0).collect();

    assert_eq!(words[0], vec!["hello", "world", "!"]);
    assert!(words[1].is_empty());
    assert_eq!(words[2], vec!["i", "<3", "you", ":-)", "#love"]);
    assert_eq!(
        pass.stats(),
        GeneratorStats {
            total: 3,
            valid: 2,
            unicode_filtered: 1
        }
    );

    fs::remove_file(test_file).unwrap();
}

#[test]
fn bytes_sentence_matches_text_sentence() {
    let from_bytes = WordGenerator::new(vec![b"Hello World!".to_vec()], true);
    let from_text = WordGenerator::new(vec!["Hello World!"], true);

    let a: Vec<_> = from_bytes.iter().map(Result::unwrap).collect();
    let b: Vec<_> = from_text.iter().map(Result::unwrap).collect();
    assert_eq!(a, b);
    assert_eq!(a[0].0, vec!["hello", "world", "!"]);
    assert!(a[0].1.is_empty());
}

#[test]
fn json_lines_corpus_with_bad_entry() {
    let values = parse_json_lines("\"good day\"\n[104, 105]\nfalse\n").unwrap();
    let generator = WordGenerator::new(values, false);

    let results: Vec<_> = generator.iter().collect();
    assert_eq!(results[0].as_ref().unwrap().0, vec!["good", "day"]);
    assert_eq!(results[1].as_ref().unwrap().0, vec!["hi"]);
    assert!(matches!(results[2], Err(MojitokError::InvalidInputType(_))));
}

#[test]
fn unicode_allowed_corpus_keeps_sentence() {
    let config = WordGeneratorConfig {
        allow_unicode_text: true,
        ..WordGeneratorConfig::default()
    };
    let generator = WordGenerator::with_config(vec!["Dobrý den?"], config);
    let words = generator.generate_array().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0][0], "dobr");
    assert!(words[0].contains(&"den".to_string()));
    assert_eq!(words[0].last().unwrap(), "?");
}

#[test]
fn for_loop_over_generator_reference() {
    let generator = WordGenerator::new(vec!["a.m. meeting", "see www.sample.com"], false);
    let mut collected = Vec::new();
    for item in &generator {
        let (words, _) = item.unwrap();
        collected.push(words);
    }
    assert_eq!(collected[0], vec!["a.m.", "meeting"]);
    assert_eq!(collected[1], vec!["see", "www.sample.com"]);
}
