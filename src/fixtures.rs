use common::Board;

/// The standard opening position in the form the game server sends it.
pub const START: &str = r#"[
    ["r","n","b","q","k","b","n","r"],
    ["p","p","p","p","p","p","p","p"],
    ["","","","","","","",""],
    ["","","","","","","",""],
    ["","","","","","","",""],
    ["","","","","","","",""],
    ["P","P","P","P","P","P","P","P"],
    ["R","N","B","Q","K","B","N","R"]
]"#;

pub fn start_position() -> Board {
    serde_json::from_str(START).unwrap()
}
