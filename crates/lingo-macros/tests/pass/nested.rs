// Nested groups and literal brackets
use lingo::phrases;

fn main() {
    let commands = phrases!("(turn|switch) (on|off (the|a) light)", "say (hello)");
    assert_eq!(commands.len(), 7);
    assert!(commands.contains(&"switch off a light"));
    assert!(commands.contains(&"say ( hello )"));
}
