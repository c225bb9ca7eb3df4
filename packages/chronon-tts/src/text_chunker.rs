//! Splits input text into the units the synthesizer is called with.
use regex::Regex;
use std::sync::OnceLock;

static PARAGRAPH_SPLIT: OnceLock<Regex> = OnceLock::new();
static SENTENCE_END: OnceLock<Regex> = OnceLock::new();

fn paragraph_split() -> &'static Regex {
    PARAGRAPH_SPLIT.get_or_init(|| Regex::new(r"\n+").expect("valid paragraph pattern"))
}

fn sentence_end() -> &'static Regex {
    SENTENCE_END.get_or_init(|| Regex::new(r"[.!?;:]+[\s]+").expect("valid sentence pattern"))
}

/// Configuration for text chunking
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Longest chunk, in characters, sent to the engine in one request
    pub max_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self { max_chars: 400 }
    }
}

/// One piece of input text in synthesis order
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    pub content: String,
    pub chunk_index: usize,
}

/// Splits on newline runs, then breaks anything longer than `max_chars` at
/// sentence ends and, failing that, at whitespace. Blank pieces are dropped.
pub fn chunk_text(text: &str, config: &ChunkerConfig) -> Vec<TextChunk> {
    let max_chars = config.max_chars.max(1);

    paragraph_split()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .flat_map(|p| split_long(p, max_chars))
        .enumerate()
        .map(|(chunk_index, content)| TextChunk {
            content,
            chunk_index,
        })
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn split_long(paragraph: &str, max_chars: usize) -> Vec<String> {
    if char_len(paragraph) <= max_chars {
        return vec![paragraph.to_string()];
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in sentence_end().find_iter(paragraph) {
        sentences.push(paragraph[start..m.end()].trim());
        start = m.end();
    }
    sentences.push(paragraph[start..].trim());

    let mut result = Vec::new();
    let mut current = String::new();
    for sentence in sentences.into_iter().filter(|s| !s.is_empty()) {
        if char_len(sentence) > max_chars {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
            result.extend(split_words(sentence, max_chars));
            continue;
        }

        let joined = if current.is_empty() {
            char_len(sentence)
        } else {
            char_len(&current) + 1 + char_len(sentence)
        };
        if joined > max_chars && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(sentence);
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Word-level fallback. A single word longer than `max_chars` is cut by
/// characters.
fn split_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        if char_len(word) > max_chars {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            result.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
            continue;
        }

        if !current.is_empty() && char_len(&current) + 1 + char_len(word) > max_chars {
            result.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
}
