//! End-to-end attacks on ciphertexts of English and French prose.

use cryptanalysis::statistics::index_of_coincidence;
use cryptanalysis::{
    AnalysisError, AnalyzerConfig, KeyLength, ReferenceDistribution, Serie, VigenereCryptanalysis,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vigenere::{encrypt, Key, NormalizedText};

const ENGLISH_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    It was a bright cold morning in the harbour town, and the fishermen were already \
    hauling their nets onto the stone quay while the gulls circled overhead. \
    Nobody in the village could remember a winter as long as this one; the snow had \
    arrived before the harvest was finished and it still lay in the fields beside the river. \
    The old lighthouse keeper walked down the hill every day to buy bread and to hear \
    the news from the ships that came in from the north. He liked to say that the sea \
    always told the truth to those who were patient enough to listen, and that a careful \
    reader of the weather would never be caught by surprise. \
    In the afternoon the children gathered at the school by the church, where their teacher \
    read them stories about explorers who had crossed the great deserts and mountains of the \
    world in search of forgotten cities and hidden treasure.";

const FRENCH_TEXT: &str = "Le principe de Kerckhoffs affirme que la securite d'un systeme de \
    chiffrement ne doit reposer que sur le secret de la clef et non sur celui de l'algorithme. \
    Au dix-neuvieme siecle, les militaires francais utilisaient encore des methodes de \
    chiffrement par substitution que les cryptologues savaient deja casser grace a l'analyse \
    des frequences. Dans une langue comme le francais, la lettre E apparait beaucoup plus \
    souvent que les autres, suivie par les lettres A, S, I et N, et cette regularite permet de \
    retrouver la clef lorsque le texte chiffre est suffisamment long pour que les statistiques \
    soient fiables.";

fn encrypt_str(text: &str, key: &str) -> (NormalizedText, String) {
    let key: Key = key.parse().unwrap();
    let plaintext = NormalizedText::normalize(text);
    let ciphertext = encrypt(&plaintext, &key).to_string();
    (plaintext, ciphertext)
}

fn english() -> VigenereCryptanalysis {
    VigenereCryptanalysis::with_reference(ReferenceDistribution::english())
}

fn french() -> VigenereCryptanalysis {
    VigenereCryptanalysis::with_reference(ReferenceDistribution::french())
}

#[test]
fn recovers_key_from_english_ciphertext() {
    let (plaintext, ciphertext) = encrypt_str(ENGLISH_TEXT, "KEY");
    let analysis = english().analyze(&ciphertext, None).unwrap();

    match &analysis.key_length {
        KeyLength::Guessed(estimate) => {
            assert_eq!(estimate.length, 3);
            // The multiple of the period is the alternative
            assert_eq!(estimate.ranking.runner_up.unwrap().candidate, 9);
        }
        other => panic!("expected a guessed key length, got {other:?}"),
    }
    assert_eq!(analysis.key().to_string(), "KEY");
    assert_eq!(analysis.plaintext, plaintext);
}

#[test]
fn guesses_exact_length_for_various_keys() {
    let analyzer = english();
    for key in ["KEY", "LEMON", "CIPHER", "SECRETKEY"] {
        let (plaintext, ciphertext) = encrypt_str(ENGLISH_TEXT, key);
        let analysis = analyzer.analyze(&ciphertext, None).unwrap();
        assert_eq!(analysis.key_length.value(), key.len(), "key {key}");
        assert_eq!(analysis.key().to_string(), key);
        assert_eq!(analysis.plaintext, plaintext);
    }
}

#[test]
fn raw_ciphertext_formatting_is_ignored() {
    let (_, ciphertext) = encrypt_str(ENGLISH_TEXT, "LEMON");
    let spaced: String = ciphertext
        .to_lowercase()
        .chars()
        .enumerate()
        .flat_map(|(i, c)| {
            if i % 5 == 4 {
                vec![c, ' ']
            } else {
                vec![c]
            }
        })
        .collect();

    let analysis = english().analyze(&spaced, None).unwrap();
    assert_eq!(analysis.key().to_string(), "LEMON");
}

#[test]
fn recovers_key_from_french_ciphertext() {
    let (plaintext, ciphertext) = encrypt_str(FRENCH_TEXT, "CLEF");
    let analysis = french().analyze(&ciphertext, None).unwrap();
    assert_eq!(analysis.key().to_string(), "CLEF");
    assert_eq!(analysis.plaintext, plaintext);
}

#[test]
fn multiple_of_key_length_still_decrypts() {
    let (plaintext, ciphertext) = encrypt_str(FRENCH_TEXT, "MYKEY");
    let analysis = french().analyze(&ciphertext, None).unwrap();

    // Twice the period scores marginally higher; the true length is the runner-up
    match &analysis.key_length {
        KeyLength::Guessed(estimate) => {
            assert_eq!(estimate.length, 10);
            assert_eq!(estimate.ranking.runner_up.unwrap().candidate, 5);
        }
        other => panic!("expected a guessed key length, got {other:?}"),
    }
    assert_eq!(analysis.key().to_string(), "MYKEYMYKEY");
    assert_eq!(analysis.plaintext, plaintext);
}

#[test]
fn shorter_key_tolerance_picks_the_period() {
    let (_, ciphertext) = encrypt_str(FRENCH_TEXT, "MYKEY");
    let config = AnalyzerConfig {
        shorter_key_tolerance: Some(0.05),
        ..Default::default()
    };
    let analyzer = VigenereCryptanalysis::new(ReferenceDistribution::french(), config).unwrap();

    let analysis = analyzer.analyze(&ciphertext, None).unwrap();
    assert_eq!(analysis.key().to_string(), "MYKEY");
}

#[test]
fn provided_key_length_skips_estimation() {
    let (plaintext, ciphertext) = encrypt_str(FRENCH_TEXT, "KEY");
    let analysis = french().analyze(&ciphertext, Some(3)).unwrap();
    assert_eq!(analysis.key_length, KeyLength::Provided(3));
    assert_eq!(analysis.key().to_string(), "KEY");
    assert_eq!(analysis.plaintext, plaintext);
}

#[test]
fn pangram_alone_is_too_short_to_find_the_period() {
    // 35 letters allow a single candidate length, so the result is a Caesar guess
    let (_, ciphertext) = encrypt_str("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG", "KEY");
    let analysis = english().analyze(&ciphertext, None).unwrap();

    assert_eq!(analysis.key_length.value(), 1);
    assert_eq!(analysis.key().len(), 1);
    assert_eq!(
        encrypt(&analysis.plaintext, analysis.key()).to_string(),
        ciphertext
    );
}

#[test]
fn short_ciphertext_is_insufficient() {
    let result = english().analyze("Too short, sorry!", None);
    assert_eq!(
        result,
        Err(AnalysisError::InsufficientData {
            needed: 20,
            available: 13
        })
    );
}

#[test]
fn uniform_text_has_low_coincidence() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let symbols: Vec<u8> = (0..20_000).map(|_| rng.gen_range(0..26u8)).collect();
    let text = NormalizedText::from_indices(symbols).unwrap();

    let ic = index_of_coincidence(&Serie::new(&text, 1, 0).unwrap()).unwrap();
    assert!((ic - 1.0 / 26.0).abs() < 0.002, "ic was {ic}");

    let english_ic = index_of_coincidence(
        &Serie::new(&NormalizedText::normalize(ENGLISH_TEXT), 1, 0).unwrap(),
    )
    .unwrap();
    assert!(english_ic > 0.06 && english_ic < 0.075, "ic was {english_ic}");
}
