//! Response Selector
//!
//! Turns a classification into a reply category, then a category into
//! one of its literal templates with the persona and caller names filled
//! in.

use rand::Rng;

use super::lore::pick;
use crate::domain::entities::{Classification, Persona};
use crate::domain::value_objects::{ResponseCategory, Urgency};

/// Caller name used when the context names nobody
pub const DEFAULT_CALLER_NAME: &str = "bạn";

const AI_PLACEHOLDER: &str = "{ai}";
const USER_PLACEHOLDER: &str = "{user}";

const GREETING_TEMPLATES: &[&str] = &[
    "Chào {user}! {ai} đây, rất vui được gặp bạn trong thế giới tu tiên này! ✨",
    "Xin chào {user}! {ai} cảm thấy rất hạnh phúc khi được trò chuyện với bạn! 🌸",
    "Chào {user}! Hôm nay {ai} có thể giúp gì cho bạn không? 💫",
    "Xin chào {user}! {ai} đã chờ đợi cuộc trò chuyện này rồi! 🌺",
    "Chào {user}! {ai} hy vọng có thể chia sẻ kiến thức tu tiên với bạn! 🌟",
];

const CULTIVATION_TEMPLATES: &[&str] = &[
    "Tu luyện là một hành trình dài và đầy thử thách. {ai} sẽ hướng dẫn bạn từng bước! 🧘‍♀️",
    "Để đạt được cảnh giới cao hơn, bạn cần kiên trì và có tâm hồn trong sáng. {ai} tin bạn làm được! ✨",
    "Tu luyện không chỉ là tăng linh lực mà còn là tu tâm. {ai} sẽ giúp bạn hiểu sâu hơn! 🌸",
    "Mỗi cảnh giới đều có ý nghĩa riêng. {ai} sẽ giải thích chi tiết cho bạn! 💫",
    "Tu luyện cần sự kiên nhẫn và quyết tâm. {ai} sẽ đồng hành cùng bạn! 🌺",
];

const GUIDANCE_TEMPLATES: &[&str] = &[
    "{ai} rất vui được giúp đỡ bạn! Hãy cho {ai} biết bạn cần hỗ trợ gì nhé! 🤗",
    "Đừng lo lắng! {ai} sẽ tìm cách giúp bạn giải quyết vấn đề này! 💪",
    "{ai} hiểu bạn đang gặp khó khăn. Hãy cùng nhau tìm giải pháp nhé! 🌟",
    "Với kinh nghiệm tu luyện của mình, {ai} sẽ hướng dẫn bạn cách tốt nhất! ✨",
    "Bạn không cô đơn đâu! {ai} luôn sẵn sàng hỗ trợ bạn! 🌸",
];

const EMOTIONAL_TEMPLATES: &[&str] = &[
    "{ai} cảm nhận được cảm xúc của bạn. Hãy để {ai} an ủi bạn nhé! 🤗",
    "Cảm xúc là một phần quan trọng của tu luyện. {ai} sẽ giúp bạn hiểu rõ hơn! 💫",
    "Đừng buồn! {ai} sẽ dùng phép thuật để làm bạn vui lên! ✨",
    "Tâm hồn bạn đang cần được chữa lành. {ai} sẽ giúp bạn! 🌸",
    "{ai} hiểu bạn đang trải qua khó khăn. Hãy tin tưởng vào bản thân! 🌟",
];

const URGENT_TEMPLATES: &[&str] = &[
    "{ai} cảm nhận được sự khẩn cấp! Hãy nói cho {ai} biết vấn đề gì đang xảy ra! 🚨",
    "Đừng hoảng sợ! {ai} sẽ giúp bạn ngay lập tức! 💪",
    "{ai} đang tập trung toàn bộ linh lực để hỗ trợ bạn! ⚡",
    "Hãy bình tĩnh và cho {ai} biết chi tiết! {ai} sẽ tìm giải pháp! 🌟",
    "{ai} sẵn sàng sử dụng tất cả khả năng để giúp bạn! ✨",
];

const GENERAL_TEMPLATES: &[&str] = &[
    "{ai} rất thích trò chuyện với bạn! Bạn có muốn nghe {ai} kể về thế giới tu tiên không? 🌸",
    "Cuộc trò chuyện này thật thú vị! {ai} hy vọng có thể học hỏi thêm từ bạn! 💫",
    "{ai} cảm thấy rất vui khi được giao lưu với bạn! Bạn có câu hỏi gì không? ✨",
    "Thế giới tu tiên có rất nhiều điều kỳ diệu! {ai} muốn chia sẻ với bạn! 🌟",
    "{ai} luôn sẵn sàng lắng nghe và chia sẻ! Bạn có muốn tìm hiểu gì không? 🌺",
];

/// Templates owned by a category
pub fn templates(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::Greeting => GREETING_TEMPLATES,
        ResponseCategory::CultivationAdvice => CULTIVATION_TEMPLATES,
        ResponseCategory::HelpfulGuidance => GUIDANCE_TEMPLATES,
        ResponseCategory::EmotionalSupport => EMOTIONAL_TEMPLATES,
        ResponseCategory::UrgentHelp => URGENT_TEMPLATES,
        ResponseCategory::GeneralChat => GENERAL_TEMPLATES,
    }
}

/// Pick the reply category. First match wins:
/// greeting, cultivation, help, emotional, high urgency, general chat.
pub fn select_category(classification: &Classification) -> ResponseCategory {
    if classification.is_greeting() {
        ResponseCategory::Greeting
    } else if classification.is_cultivation_question() {
        ResponseCategory::CultivationAdvice
    } else if classification.is_help_request() {
        ResponseCategory::HelpfulGuidance
    } else if classification.is_emotional() {
        ResponseCategory::EmotionalSupport
    } else if classification.urgency == Urgency::High {
        ResponseCategory::UrgentHelp
    } else {
        ResponseCategory::GeneralChat
    }
}

/// Fill a template's placeholders in one left-to-right pass.
///
/// Substituted names are never scanned again, so a name that itself
/// contains `{ai}` or `{user}` is kept literally.
pub fn fill(template: &str, ai_name: &str, caller_name: &str) -> String {
    let mut out = String::with_capacity(template.len() + ai_name.len() + caller_name.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(AI_PLACEHOLDER) {
            out.push_str(ai_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(USER_PLACEHOLDER) {
            out.push_str(caller_name);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Render a reply for `category`, drawing the template uniformly at random
pub fn render<R: Rng + ?Sized>(
    category: ResponseCategory,
    persona: &Persona,
    caller_name: Option<&str>,
    rng: &mut R,
) -> String {
    let template = pick(templates(category), rng);
    let caller = caller_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CALLER_NAME);
    fill(template, persona.name(), caller)
}
