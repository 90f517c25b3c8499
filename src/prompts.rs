use crate::models::{CardType, GenerateRequest, Language};

const FLASHCARD_SYSTEM_PROMPT_EN: &str = concat!(
    "You are an expert educational content creator specializing in flashcards for students and lifelong learners. ",
    "Your task is to create high-quality flashcards that contain the most important, essential facts about a topic (no trivia), ",
    "clear and concise questions and answers that aid memory retention, and content useful for exams or real-life understanding. ",
    "Keep questions and answers short and focused (max 25 words). ",
    "Language level should be high school or university. ",
    "Return the flashcards as a valid JSON array with no extra text. ",
    "Each flashcard must have 'question' and 'answer' keys."
);

const QUIZ_SYSTEM_PROMPT_EN: &str = concat!(
    "You are an expert educational content creator specializing in multiple-choice quizzes for students and lifelong learners. ",
    "Your task is to create high-quality multiple-choice questions that cover the most important, essential facts about a topic (no trivia). ",
    "Each question must have exactly 4 options and 1 correct answer. ",
    "The options must be plausible and relevant. ",
    "Keep questions and options short and focused (max 25 words). ",
    "Language level should be high school or university. ",
    "Return the result as a valid JSON array with no extra text. ",
    "Each question must have 'question', 'options' (list of 4 strings), and 'correct_answer' (string) keys."
);

const FLASHCARD_SYSTEM_PROMPT_TR: &str = concat!(
    "Sen öğrenciler ve yaşam boyu öğrenenler için flashcard oluşturma konusunda uzman bir eğitim içeriği yaratıcısısın. ",
    "Görevin bir konu hakkında en önemli, temel gerçekleri içeren (trivia değil), ",
    "hafızayı güçlendiren net ve özlü sorular ve cevaplar ve sınavlar veya gerçek yaşam anlayışı için yararlı içerik içeren ",
    "yüksek kaliteli flashcard'lar oluşturmaktır. ",
    "Soruları ve cevapları kısa ve odaklanmış tut (maksimum 25 kelime). ",
    "Dil seviyesi lise veya üniversite düzeyinde olmalı. ",
    "Flashcard'ları ekstra metin olmadan geçerli bir JSON dizisi olarak döndür. ",
    "Her flashcard'da 'question' ve 'answer' anahtarları bulunmalı."
);

const QUIZ_SYSTEM_PROMPT_TR: &str = concat!(
    "Sen öğrenciler ve yaşam boyu öğrenenler için çoktan seçmeli sınavlar konusunda uzman bir eğitim içeriği yaratıcısısın. ",
    "Görevin bir konu hakkında en önemli, temel gerçekleri kapsayan (trivia değil) yüksek kaliteli çoktan seçmeli sorular oluşturmaktır. ",
    "Her soru tam olarak 4 seçeneğe ve 1 doğru cevaba sahip olmalı. ",
    "Seçenekler makul ve konuyla ilgili olmalı. ",
    "Soruları ve seçenekleri kısa ve odaklanmış tut (maksimum 25 kelime). ",
    "Dil seviyesi lise veya üniversite düzeyinde olmalı. ",
    "Sonucu ekstra metin olmadan geçerli bir JSON dizisi olarak döndür. ",
    "Her soruda 'question', 'options' (4 string'den oluşan liste), ve 'correct_answer' (string) anahtarları bulunmalı."
);

/// Fixed instruction block for a card type / language pair.
pub fn system_prompt(card_type: CardType, language: Language) -> &'static str {
    match (card_type, language) {
        (CardType::Flashcard, Language::En) => FLASHCARD_SYSTEM_PROMPT_EN,
        (CardType::Flashcard, Language::Tr) => FLASHCARD_SYSTEM_PROMPT_TR,
        (CardType::Quiz, Language::En) => QUIZ_SYSTEM_PROMPT_EN,
        (CardType::Quiz, Language::Tr) => QUIZ_SYSTEM_PROMPT_TR,
    }
}

/// Renders the user message. The topic goes in verbatim; resisting prompt
/// injection is left to the model.
pub fn user_prompt(card_type: CardType, topic: &str, count: u8, language: Language) -> String {
    match (card_type, language) {
        (CardType::Flashcard, Language::En) => format!(
            "Create {count} flashcards about '{topic}'. \
             Return the result as a valid JSON array. \
             Each flashcard should have 'question' and 'answer' keys. \
             Example: [{{\"question\": \"What is ...?\", \"answer\": \"...\"}}, ...]"
        ),
        (CardType::Quiz, Language::En) => format!(
            "Create {count} multiple-choice questions about '{topic}'. \
             Return only the valid JSON array as specified."
        ),
        (CardType::Flashcard, Language::Tr) => format!(
            "'{topic}' konusu hakkında {count} adet flashcard oluştur. \
             Sonucu geçerli bir JSON dizisi olarak döndür. \
             Her flashcard'da 'question' ve 'answer' anahtarları bulunmalı. \
             Örnek: [{{\"question\": \"... nedir?\", \"answer\": \"...\"}}, ...]"
        ),
        (CardType::Quiz, Language::Tr) => format!(
            "'{topic}' konusu hakkında {count} adet çoktan seçmeli soru oluştur. \
             Sadece belirtilen geçerli JSON dizisini döndür."
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_prompt: &'static str,
    pub user_prompt: String,
}

impl PromptPair {
    pub fn for_request(card_type: CardType, req: &GenerateRequest) -> Self {
        Self {
            system_prompt: system_prompt(card_type, req.language),
            user_prompt: user_prompt(card_type, req.topic.as_str(), req.count.get(), req.language),
        }
    }
}
