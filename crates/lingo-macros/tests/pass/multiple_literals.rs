// Several literals are flattened in the order they are written
use lingo::phrases;

fn main() {
    let greetings = phrases!(
        "(hi|hello) there",
        "good (morning|evening)",
    );
    assert_eq!(
        greetings,
        &["hi there", "hello there", "good morning", "good evening"]
    );
}
