pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const STATS: &str = "📊";
    pub const BOOK: &str = "📖";
    pub const SCROLL: &str = "📜";
    pub const GLOBE: &str = "🌍";
    pub const EMPTY: &str = "∅";
}
