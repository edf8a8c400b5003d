//! The curated default word/phrase table.
//!
//! Order matters: it is the tie-break order for suggestions.

pub(crate) const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Emotions
    ("happy", "😊"),
    ("sad", "😢"),
    ("angry", "😠"),
    ("love", "❤️"),
    ("laugh", "😂"),
    ("smile", "😃"),
    ("cry", "😭"),
    ("wow", "😮"),
    ("cool", "😎"),
    ("heart", "❤️"),
    // Food
    ("pizza", "🍕"),
    ("burger", "🍔"),
    ("coffee", "☕"),
    ("tea", "🍵"),
    ("cake", "🍰"),
    ("ice cream", "🍦"),
    ("sushi", "🍱"),
    ("pasta", "🍝"),
    ("salad", "🥗"),
    ("sandwich", "🥪"),
    // Animals
    ("cat", "🐱"),
    ("dog", "🐶"),
    ("bird", "🐦"),
    ("fish", "🐠"),
    ("lion", "🦁"),
    ("tiger", "🐯"),
    ("elephant", "🐘"),
    ("monkey", "🐒"),
    ("bear", "🐻"),
    ("rabbit", "🐰"),
    // Weather
    ("sun", "☀️"),
    ("rain", "🌧️"),
    ("cloud", "☁️"),
    ("snow", "🌨️"),
    ("storm", "⛈️"),
    ("wind", "💨"),
    ("hot", "🔥"),
    ("cold", "❄️"),
    // Objects
    ("house", "🏠"),
    ("car", "🚗"),
    ("phone", "📱"),
    ("computer", "💻"),
    ("book", "📚"),
    ("pen", "✏️"),
    ("clock", "🕐"),
    ("money", "💰"),
    ("gift", "🎁"),
    ("star", "⭐"),
    // Actions
    ("run", "🏃"),
    ("walk", "🚶"),
    ("jump", "🦘"),
    ("dance", "💃"),
    ("sing", "🎤"),
    ("eat", "🍽️"),
    ("sleep", "😴"),
    ("work", "💼"),
    ("study", "📖"),
    ("play", "🎮"),
    // Nature
    ("tree", "🌳"),
    ("flower", "🌸"),
    ("mountain", "⛰️"),
    ("ocean", "🌊"),
    ("beach", "🏖️"),
    ("forest", "🌲"),
    ("desert", "🏜️"),
    ("river", "🌊"),
    // Time
    ("morning", "🌅"),
    ("night", "🌙"),
    ("day", "☀️"),
    ("weekend", "🎉"),
    ("holiday", "🎊"),
    // Phrases
    ("good morning", "🌅"),
    ("good night", "🌙"),
    ("thank you", "🙏"),
    ("please", "🙏"),
    ("sorry", "😔"),
    ("welcome", "👋"),
    ("goodbye", "👋"),
    ("hello", "👋"),
    ("yes", "👍"),
    ("no", "👎"),
];
