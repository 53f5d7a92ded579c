//! Canned reply tables, one list per category.

pub(crate) const GREETING: &[&str] = &[
    "Hello! I'm Neura, your AI assistant. How can I help you today?",
    "Hi there! I'm here to assist you with any questions you might have.",
    "Greetings! I'm ready to help you explore ideas and answer questions.",
];

pub(crate) const TECHNOLOGY: &[&str] = &[
    "Technology is evolving at an incredible pace. AI, quantum computing, and biotechnology are pushing the boundaries of what's possible.",
    "The current trends in technology include edge computing, AI democratization, and sustainable tech solutions.",
    "Technology should aim to solve human problems while being mindful of ethical considerations and accessibility.",
];

pub(crate) const SCIENCE: &[&str] = &[
    "Science helps us understand the universe from quantum particles to galactic superclusters.",
    "Recent scientific breakthroughs include CRISPR gene editing, gravitational wave detection, and advancements in fusion energy.",
    "The scientific method remains our most reliable tool for discovering truth about the natural world.",
];

pub(crate) const HELP: &[&str] = &[
    "I can help with explanations, brainstorming, answering questions, and discussing various topics.",
    "You can ask me about technology, science, general knowledge, or request help with problem-solving.",
    "Try asking specific questions or request explanations on topics you're curious about.",
];

pub(crate) const FALLBACK: &[&str] = &[
    "That's an interesting point. Could you tell me more about what you're thinking?",
    "I understand. Let me think about that for a moment...",
    "Thanks for sharing. From my perspective, this topic raises several interesting considerations.",
    "I'd be happy to explore that idea with you. What aspect are you most curious about?",
    "That's a thoughtful question. Let me provide some insights based on available information.",
];
