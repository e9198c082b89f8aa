/// Lines shown while waiting for the assistant
pub const LOADING_MESSAGES: [&str; 4] = [
    "Finding insights to help you lead at every step",
    "Connecting the dots on your path to growth",
    "Let's see what I can find for you",
    "Crafting something meaningful just for you",
];

pub fn random_loading_message() -> &'static str {
    LOADING_MESSAGES[fastrand::usize(..LOADING_MESSAGES.len())]
}
