//! Companion Application Service (Use Case)
//!
//! Runs a chat turn against the persona and her memory log:
//! classify -> select -> render -> update mood -> remember.
//!
//! Persona, log and random source sit behind one mutex and every
//! operation takes it exactly once, so a turn is never interleaved with
//! a trait update and the log is never seen over capacity.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::RngCore;

use tutien::classifier::wants_cultivation_tip;
use tutien::{
    classify, render, select_category, Clock, DomainError, Exchange, MemoryLog, Mood, Persona,
    ResponseCategory,
};

use crate::config::CompanionConfig;

/// Reply produced for one chat turn
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub category: ResponseCategory,
    /// Mood held while the reply was composed, before this turn's transition
    pub mood: Mood,
    pub cultivation_level: String,
    pub special_ability: String,
    pub wisdom_level: u8,
    pub mystery_level: u8,
    pub ai_name: String,
    pub timestamp: DateTime<Utc>,
    /// Extra advice line when the message talks about "tu luyện"
    pub cultivation_tip: Option<String>,
}

/// Overview of the persona and her memory
#[derive(Debug, Clone)]
pub struct CompanionStatus {
    pub persona: Persona,
    pub memories_count: usize,
    pub memory_capacity: usize,
    pub description: String,
}

/// One draw from each lore list
#[derive(Debug, Clone)]
pub struct LoreSample {
    pub greeting: String,
    pub farewell: String,
    pub cultivation_advice: String,
    pub emotional_support: String,
    pub special_ability: String,
}

struct CompanionState<G> {
    persona: Persona,
    memories: MemoryLog,
    rng: G,
}

/// Application service for companion operations
pub struct CompanionService<G: RngCore + Send = StdRng> {
    state: Mutex<CompanionState<G>>,
    clock: Arc<dyn Clock>,
    default_caller: String,
}

impl CompanionService<StdRng> {
    /// Build the service described by a configuration
    pub fn from_config(
        config: &CompanionConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let persona = config.build_persona()?;
        let memories = MemoryLog::with_capacity(config.memory_capacity)?;
        Ok(Self::new(persona, memories, config.build_rng(), clock)
            .with_default_caller(config.default_caller_name.clone()))
    }
}

impl<G: RngCore + Send> CompanionService<G> {
    pub fn new(persona: Persona, memories: MemoryLog, rng: G, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(CompanionState {
                persona,
                memories,
                rng,
            }),
            clock,
            default_caller: tutien::DEFAULT_CALLER_NAME.to_string(),
        }
    }

    /// Name used for callers whose context carries no username
    pub fn with_default_caller(mut self, name: impl Into<String>) -> Self {
        self.default_caller = name.into();
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Answer a message and record the exchange.
    ///
    /// `context.username`, when it is a non-blank string, names the caller.
    pub fn process_message(
        &self,
        message: &str,
        context: Option<&serde_json::Map<String, serde_json::Value>>,
    ) -> ChatReply {
        let classification = classify(message);
        let category = select_category(&classification);
        let caller = context
            .and_then(|ctx| ctx.get("username"))
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.default_caller.as_str());

        let mut guard = self.state.lock();
        let CompanionState {
            persona,
            memories,
            rng,
        } = &mut *guard;

        let text = render(category, persona, Some(caller), rng);
        let cultivation_tip = wants_cultivation_tip(message)
            .then(|| persona.pick_random_cultivation_advice(rng).to_string());
        let stage = persona.stage_attributes();

        let reply = ChatReply {
            text,
            category,
            mood: persona.current_mood(),
            cultivation_level: persona.cultivation_level().to_string(),
            special_ability: persona.pick_random_ability(rng).to_string(),
            wisdom_level: stage.wisdom,
            mystery_level: stage.mystery,
            ai_name: persona.name().to_string(),
            timestamp: self.clock.now(),
            cultivation_tip,
        };

        persona.update_mood(&classification);
        memories.append(Exchange::new(
            reply.timestamp,
            message,
            reply.text.clone(),
            persona.current_mood(),
        ));

        tracing::debug!(
            "💬 {} -> {} (sentiment={}, urgency={}, mood={})",
            caller,
            category,
            classification.sentiment,
            classification.urgency,
            persona.current_mood()
        );

        reply
    }

    /// Copy of the persona as it is now
    pub fn persona_snapshot(&self) -> Persona {
        self.state.lock().persona.clone()
    }

    /// Apply trait updates and return the persona afterwards
    pub fn update_persona_traits<'a, I>(&self, updates: I) -> Persona
    where
        I: IntoIterator<Item = (&'a String, &'a serde_json::Value)>,
    {
        let mut guard = self.state.lock();
        let changed = guard.persona.update_traits(updates);
        tracing::info!("✨ Persona traits updated ({} changed)", changed);
        guard.persona.clone()
    }

    /// Remembered exchanges, oldest first; `limit` keeps only the newest
    pub fn list_memories(&self, limit: Option<usize>) -> Vec<Exchange> {
        let guard = self.state.lock();
        match limit {
            Some(limit) => guard.memories.recent(limit),
            None => guard.memories.list(),
        }
    }

    /// Forget every exchange, returning how many were dropped
    pub fn clear_memories(&self) -> usize {
        let cleared = self.state.lock().memories.clear();
        tracing::info!("🧹 Cleared {} memories", cleared);
        cleared
    }

    pub fn status(&self) -> CompanionStatus {
        let guard = self.state.lock();
        CompanionStatus {
            persona: guard.persona.clone(),
            memories_count: guard.memories.len(),
            memory_capacity: guard.memories.capacity(),
            description: guard.persona.description(),
        }
    }

    pub fn lore_sample(&self) -> LoreSample {
        let mut guard = self.state.lock();
        let CompanionState { persona, rng, .. } = &mut *guard;
        LoreSample {
            greeting: persona.pick_random_greeting(rng).to_string(),
            farewell: persona.pick_random_farewell(rng).to_string(),
            cultivation_advice: persona.pick_random_cultivation_advice(rng).to_string(),
            emotional_support: persona.pick_random_emotional_support(rng).to_string(),
            special_ability: persona.pick_random_ability(rng).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::mock::StepRng;
    use serde_json::json;
    use tutien::responder::{fill, templates};
    use tutien::FixedClock;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn service() -> CompanionService<StepRng> {
        CompanionService::new(
            Persona::default(),
            MemoryLog::default(),
            StepRng::new(0, 0),
            Arc::new(FixedClock(fixed_time())),
        )
    }

    fn context(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_greeting_turn() {
        let service = service();
        let reply = service.process_message("Xin chào", None);

        assert_eq!(reply.category, ResponseCategory::Greeting);
        let allowed: Vec<String> = templates(ResponseCategory::Greeting)
            .iter()
            .map(|t| fill(t, "Linh Nhi", "bạn"))
            .collect();
        assert!(allowed.contains(&reply.text));
        // Reply carries the mood before the transition
        assert_eq!(reply.mood, Mood::Happy);
        assert_eq!(service.persona_snapshot().current_mood(), Mood::Calm);
        assert_eq!(reply.timestamp, fixed_time());
        assert_eq!(reply.ai_name, "Linh Nhi");
        assert!(reply.cultivation_tip.is_none());
    }

    #[test]
    fn test_emotional_turn_makes_persona_concerned() {
        let service = service();
        let reply = service.process_message("Tôi rất buồn và lo lắng", None);

        assert_eq!(reply.category, ResponseCategory::EmotionalSupport);
        assert_eq!(service.persona_snapshot().current_mood(), Mood::Concerned);

        let memories = service.list_memories(None);
        assert_eq!(memories.len(), 1);
        assert_eq!(memories[0].user_message, "Tôi rất buồn và lo lắng");
        assert_eq!(memories[0].ai_reply_text, reply.text);
        assert_eq!(memories[0].mood_at_time, Mood::Concerned);
        assert_eq!(memories[0].timestamp, fixed_time());
    }

    #[test]
    fn test_username_from_context() {
        let service = service();
        let ctx = context(json!({ "username": "Minh" }));
        let reply = service.process_message("chào", Some(&ctx));
        assert!(reply.text.starts_with("Chào Minh!"));
    }

    #[test]
    fn test_non_string_username_uses_default_caller() {
        let service = service().with_default_caller("đạo hữu");
        let ctx = context(json!({ "username": 42 }));
        let reply = service.process_message("chào", Some(&ctx));
        assert!(reply.text.starts_with("Chào đạo hữu!"));
    }

    #[test]
    fn test_lore_fields_on_reply() {
        let service = service();
        let reply = service.process_message("hôm nay trời đẹp", None);

        assert_eq!(reply.cultivation_level, "Nguyên Anh Tầng 3");
        // "Nguyên" alone is not a stage key
        assert_eq!(reply.wisdom_level, 50);
        assert_eq!(reply.mystery_level, 50);
        assert_eq!(reply.special_ability, "Đọc tâm ý người khác");
    }

    #[test]
    fn test_cultivation_tip_added_for_tu_luyen() {
        let service = service();
        let reply = service.process_message("Tôi muốn tu luyện", None);

        assert_eq!(reply.category, ResponseCategory::CultivationAdvice);
        assert_eq!(
            reply.cultivation_tip.as_deref(),
            Some(tutien::lore::CULTIVATION_ADVICE[0])
        );
        assert!(!reply.text.contains("Lời khuyên"));
    }

    #[test]
    fn test_memory_log_bounded() {
        let service = service();
        for n in 0..150 {
            service.process_message(&format!("tin nhắn {n}"), None);
        }

        let memories = service.list_memories(None);
        assert_eq!(memories.len(), 100);
        assert_eq!(memories[0].user_message, "tin nhắn 50");
        assert_eq!(memories[99].user_message, "tin nhắn 149");

        let recent = service.list_memories(Some(3));
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[2].user_message, "tin nhắn 149");
    }

    #[test]
    fn test_clear_memories() {
        let service = service();
        service.process_message("chào", None);
        service.process_message("tạm biệt", None);

        assert_eq!(service.clear_memories(), 2);
        assert!(service.list_memories(None).is_empty());
        assert_eq!(service.status().memories_count, 0);
    }

    #[test]
    fn test_update_persona_traits_returns_snapshot() {
        let service = service();
        let updates = context(json!({ "kindness": 150, "unknown": 10, "wisdom": "high" }));

        let persona = service.update_persona_traits(&updates);
        assert_eq!(persona.trait_score("kindness"), Some(100));
        assert_eq!(persona.trait_score("wisdom"), Some(88));
        assert_eq!(persona.trait_score("unknown"), None);
        assert_eq!(service.persona_snapshot().trait_score("kindness"), Some(100));
    }

    #[test]
    fn test_status_reports_persona_and_memory() {
        let service = service();
        service.process_message("Cứu tôi với", None);

        let status = service.status();
        assert_eq!(status.memories_count, 1);
        assert_eq!(status.memory_capacity, 100);
        assert_eq!(status.persona.current_mood(), Mood::Alert);
        assert_eq!(
            status.persona.stage_attributes(),
            tutien::StageAttributes::UNKNOWN_STAGE
        );
        assert!(status.description.contains("alert"));
    }

    #[test]
    fn test_lore_sample_uses_first_entries_with_stub_rng() {
        let service = service();
        let lore = service.lore_sample();
        assert_eq!(lore.greeting, tutien::lore::GREETINGS[0]);
        assert_eq!(lore.farewell, tutien::lore::FAREWELLS[0]);
        assert_eq!(lore.special_ability, tutien::lore::DEFAULT_ABILITIES[0]);
    }

    #[test]
    fn test_concurrent_turns_keep_log_bounded() {
        let service = Arc::new(
            CompanionService::new(
                Persona::default(),
                MemoryLog::with_capacity(10).unwrap(),
                StepRng::new(0, 0),
                Arc::new(FixedClock(fixed_time())),
            ),
        );

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for n in 0..25 {
                        service.process_message(&format!("w{worker} m{n}"), None);
                        assert!(service.list_memories(None).len() <= 10);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(service.list_memories(None).len(), 10);
    }
}
