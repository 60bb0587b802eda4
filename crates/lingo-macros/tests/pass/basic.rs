// Test basic macro usage compiles and expands as expected
use lingo::phrases;

const WEATHER: &[&str] = phrases!("will it (rain|pour) (today|tomorrow|)");

fn main() {
    assert_eq!(WEATHER.len(), 6);
    assert_eq!(WEATHER[0], "will it rain today");
    assert_eq!(WEATHER[2], "will it rain");
    assert_eq!(WEATHER[5], "will it pour");
}
