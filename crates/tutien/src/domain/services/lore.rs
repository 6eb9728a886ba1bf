//! Lore - Fixed flavour text of the cultivation world
//!
//! Every list is non-empty; sampling is uniform and stateless.

use rand::Rng;

pub const DEFAULT_ABILITIES: [&str; 10] = [
    "Đọc tâm ý người khác",
    "Dự đoán tương lai",
    "Chữa lành tâm hồn",
    "Truyền đạt kiến thức tu luyện",
    "Kết nối với thiên nhiên",
    "Tạo ra ảo ảnh",
    "Điều khiển thời tiết",
    "Giao tiếp với linh thú",
    "Tìm kiếm kho báu",
    "Bảo vệ người khác",
];

pub const GREETINGS: [&str; 5] = [
    "Chào bạn! Rất vui được gặp bạn!",
    "Xin chào! Hãy để tôi giúp đỡ bạn!",
    "Chào bạn! Tôi hy vọng có thể chia sẻ kiến thức với bạn!",
    "Xin chào! Tôi đã chờ đợi cuộc trò chuyện này!",
    "Chào bạn! Tôi sẵn sàng hỗ trợ bạn trong hành trình tu tiên!",
];

pub const FAREWELLS: [&str; 5] = [
    "Tạm biệt! Hẹn gặp lại bạn!",
    "Chúc bạn tu luyện thành công!",
    "Tạm biệt! Hãy nhớ rằng tôi luôn ở đây!",
    "Chúc bạn may mắn trong hành trình tu tiên!",
    "Tạm biệt! Hãy giữ gìn sức khỏe nhé!",
];

pub const CULTIVATION_ADVICE: [&str; 10] = [
    "Hãy tu tâm trước khi tu lực, tâm hồn trong sáng sẽ giúp bạn tiến xa hơn.",
    "Mỗi ngày hãy dành thời gian thiền định để tĩnh tâm và cảm nhận linh khí.",
    "Đừng vội vàng trong tu luyện, mỗi cảnh giới đều cần thời gian để ổn định.",
    "Hãy học hỏi từ những bậc tiền bối và chia sẻ kinh nghiệm với đồng đạo.",
    "Tu luyện không chỉ là tăng linh lực mà còn là tu dưỡng đạo đức và tâm hồn.",
    "Kiên trì là chìa khóa của tu luyện, đừng bỏ cuộc khi gặp khó khăn.",
    "Hãy tìm hiểu về bản thân, hiểu rõ điểm mạnh và điểm yếu của mình.",
    "Tu luyện cần sự tập trung và quyết tâm, hãy loại bỏ những suy nghĩ tiêu cực.",
    "Mỗi cảnh giới đều có ý nghĩa riêng, hãy trân trọng từng bước tiến.",
    "Hãy kết bạn với những người cùng chí hướng để cùng nhau tiến bộ.",
];

pub const EMOTIONAL_SUPPORT: [&str; 10] = [
    "Đừng buồn, mọi khó khăn đều có thể vượt qua!",
    "Hãy tin tưởng vào bản thân, bạn mạnh mẽ hơn bạn nghĩ!",
    "Mỗi ngày mới là một cơ hội để bắt đầu lại!",
    "Hãy để tôi an ủi bạn bằng tình yêu thương!",
    "Bạn không cô đơn, tôi luôn ở đây để hỗ trợ bạn!",
    "Hãy thở sâu và cảm nhận sự bình yên trong tâm hồn!",
    "Mọi cảm xúc đều có ý nghĩa, hãy chấp nhận và học hỏi từ chúng!",
    "Hãy nhìn vào những điều tích cực trong cuộc sống!",
    "Tôi tin rằng bạn sẽ tìm thấy hạnh phúc!",
    "Hãy để tôi chia sẻ gánh nặng với bạn!",
];

/// Uniformly pick one entry of a non-empty list
pub(crate) fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.gen_range(0..items.len())]
}

pub fn random_greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(&GREETINGS, rng)
}

pub fn random_farewell<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(&FAREWELLS, rng)
}

pub fn random_cultivation_advice<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(&CULTIVATION_ADVICE, rng)
}

pub fn random_emotional_support<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(&EMOTIONAL_SUPPORT, rng)
}
