use text_tokenizer::{Language, NoStopWords, Token, Tokenizer, TokenizerConfig};

fn run(text: &str) -> Tokenizer {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer.load_text(text);
    tokenizer.tokenize();
    tokenizer
}

fn pairs(tokens: &[Token]) -> Vec<(&str, usize)> {
    tokens.iter().map(|t| (t.value(), t.count())).collect()
}

const SAMPLE: &str = "It was a bright cold day in April, and the clocks were striking thirteen.\n\
    Winston Smith, his chin nuzzled into his breast in an effort to escape the vile wind, \
    slipped quickly through the glass doors of Victory Mansions -- though not quickly \
    enough to prevent a swirl of gritty dust from entering along with him!!";

#[test]
fn cat_sat_on_the_mat() {
    let tokenizer = run("the cat sat on the mat");
    assert_eq!(
        pairs(tokenizer.tokens()),
        vec![("the", 2), ("cat", 1), ("mat", 1), ("on", 1), ("sat", 1)]
    );
}

#[test]
fn added_separator_splits_words() {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer.add_separator('_');
    tokenizer.add_separator('_');
    tokenizer.load_text("foo_bar");
    tokenizer.tokenize();
    assert_eq!(pairs(tokenizer.tokens()), vec![("bar", 1), ("foo", 1)]);
}

#[test]
fn html_script_is_not_tokenized() {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer
        .load_html("<p>Hello <script>ignored()</script>World</p>")
        .unwrap();
    assert_eq!(tokenizer.text(), "Hello World");
    tokenizer.tokenize();
    assert_eq!(pairs(tokenizer.tokens()), vec![("hello", 1), ("world", 1)]);
}

#[test]
fn html_line_breaks_separate_words() {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer
        .load_html("<ul>\n<li>alpha</li>\n<li>beta</li>\n</ul>")
        .unwrap();
    tokenizer.tokenize();
    assert_eq!(pairs(tokenizer.tokens()), vec![("alpha", 1), ("beta", 1)]);
}

#[test]
fn empty_and_blank_input_yield_no_tokens() {
    assert!(run("").tokens().is_empty());
    assert!(run("   \r\n  ").tokens().is_empty());
    assert!(run(" ,.;!? ").tokens().is_empty());
}

const INDENTED_HTML: &str = "<html>\n\t<body>\n\t\t<div>\n\t\t\t<p>Hello\tworld</p>\n\
    \t\t\t<p>Hello&nbsp;again</p>\n\t\t</div>\n\t</body>\n</html>";

const CASE_FOLDING: &str = "İstanbul İ I ΣΟΦΙΑ Straße ǅemal\u{2003}ÉCOLE\u{a0}Ǆ";

fn assert_token_invariants(tokenizer: &Tokenizer, min: usize, max: usize) {
    for token in tokenizer.tokens() {
        let value = token.value();
        let len = value.chars().count();
        assert!(len >= min && len <= max, "{token} outside [{min}, {max}]");
        assert_eq!(value, value.to_lowercase());
        assert_eq!(value, value.trim());
        assert!(!value.chars().any(char::is_whitespace), "{value:?} holds whitespace");
        assert!(!value.is_empty());
        assert!(token.count() >= 1);
    }
}

#[test]
fn every_token_respects_bounds_and_case() {
    for (min, max) in [(1, 1), (1, 3), (2, 25), (4, 6), (7, 7)] {
        for text in [SAMPLE, CASE_FOLDING, "alpha\tbeta\u{3000}gamma\u{85}delta"] {
            let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
            tokenizer.set_min_length(min);
            tokenizer.set_max_length(max);
            tokenizer.load_text(text);
            tokenizer.tokenize();
            assert_token_invariants(&tokenizer, min, max);
        }

        let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
        tokenizer.set_min_length(min);
        tokenizer.set_max_length(max);
        tokenizer.load_html(INDENTED_HTML).unwrap();
        tokenizer.tokenize();
        assert_token_invariants(&tokenizer, min, max);
    }
}

#[test]
fn indented_html_merges_counts() {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer.load_html(INDENTED_HTML).unwrap();
    tokenizer.tokenize();
    assert_eq!(
        pairs(tokenizer.tokens()),
        vec![("hello", 2), ("again", 1), ("world", 1)]
    );
}

#[test]
fn ranking_is_count_descending_then_value_ascending() {
    let tokenizer = run(SAMPLE);
    let tokens = tokenizer.tokens();
    assert!(!tokens.is_empty());
    for pair in tokens.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.count() >= b.count());
        if a.count() == b.count() {
            assert!(a.value() < b.value());
        }
    }
}

#[test]
fn blacklisted_word_never_returned() {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer.add_blacklist_words(Language::En, ["his", "quickly"]).unwrap();
    tokenizer.load_text(SAMPLE);
    tokenizer.tokenize();
    assert_eq!(tokenizer.language(), Language::En);
    assert!(tokenizer
        .tokens()
        .iter()
        .all(|t| t.value() != "his" && t.value() != "quickly"));
}

#[test]
fn default_stop_words_filter_russian_text() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.load_text("Мы были в лесу, и мы видели волков и лис.");
    tokenizer.tokenize();
    assert_eq!(tokenizer.language(), Language::Ru);
    let values: Vec<&str> = tokenizer.tokens().iter().map(Token::value).collect();
    assert!(!values.contains(&"и"));
    assert!(values.contains(&"лесу"));
}

#[test]
fn detection_is_deterministic() {
    let mut tokenizer = Tokenizer::with_stop_words(NoStopWords);
    tokenizer.load_text("Київ і Львів");
    tokenizer.tokenize();
    let first = tokenizer.language();
    for _ in 0..3 {
        tokenizer.set_language(Language::En);
        tokenizer.tokenize();
        assert_eq!(tokenizer.language(), first);
    }
    assert_eq!(first, Language::Ua);
}

#[test]
fn top_tokens_returns_only_n() {
    let tokenizer = run("one two two three three three");
    assert_eq!(pairs(tokenizer.top_tokens(2)), vec![("three", 3), ("two", 2)]);
}

#[test]
fn config_round_trips_through_tokenizer() {
    let config: TokenizerConfig = serde_json::from_str(
        r#"{"min_length": 3, "max_length": 5, "separators": ["_"], "whitelist": {"ru": ["да"]}}"#,
    )
    .unwrap();
    let tokenizer = Tokenizer::from_config(&config).unwrap();
    assert_eq!(tokenizer.min_length(), 3);
    assert_eq!(tokenizer.max_length(), 5);
    assert!(tokenizer.separators().contains(&'_'));
    assert!(tokenizer.whitelist(Language::Ru).unwrap().contains("да"));
}
