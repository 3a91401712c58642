pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const TARGET: &str = "🎯";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const BOOKS: &str = "📚";
}
