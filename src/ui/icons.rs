pub struct Icons;

impl Icons {
    pub const CHECK: &'static str = "✅";
    pub const CROSS: &'static str = "❌";
    pub const WARN: &'static str = "⚠️";
    pub const INFO: &'static str = "ℹ️";
    pub const STATS: &'static str = "📊";
    pub const DATABASE: &'static str = "🗄️";
    pub const PERSON: &'static str = "👤";
    pub const BOOK: &'static str = "📘";
    pub const MEMO: &'static str = "📝";
    pub const GRAD: &'static str = "🎓";
    pub const PACKAGE: &'static str = "📦";
}
