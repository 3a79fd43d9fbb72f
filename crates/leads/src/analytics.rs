/// Named interaction events, mirroring the site's tracking plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    ButtonClicked { label: String },
    FormSubmitted { form: &'static str, reference: String },
    ChatbotInteraction { outcome: &'static str },
    CatalogDownloaded,
}

impl AnalyticsEvent {
    /// Event name as the tracking plan spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ButtonClicked { .. } => "button clicked",
            Self::FormSubmitted { .. } => "form submitted",
            Self::ChatbotInteraction { .. } => "chatbot interaction",
            Self::CatalogDownloaded => "catalog downloaded",
        }
    }
}

/// Fire-and-forget event sink.
///
/// Tracking is best-effort: `track` cannot fail from the caller's
/// perspective and no response is consumed. A sink that loses events
/// loses events; never surface that to the visitor.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

/// Sink that emits events into the structured log stream.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: AnalyticsEvent) {
        tracing::info!(event = event.name(), detail = ?event, "analytics");
    }
}

/// Sink that drops everything. Useful in tests.
#[derive(Debug, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: AnalyticsEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: AnalyticsEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn event_names_match_the_tracking_plan() {
        let event = AnalyticsEvent::FormSubmitted {
            form: "contact",
            reference: "ref".to_string(),
        };
        assert_eq!(event.name(), "form submitted");
        assert_eq!(AnalyticsEvent::CatalogDownloaded.name(), "catalog downloaded");
    }

    #[test]
    fn sinks_receive_events_in_order() {
        let sink = RecordingSink::default();
        sink.track(AnalyticsEvent::ButtonClicked { label: "download".to_string() });
        sink.track(AnalyticsEvent::CatalogDownloaded);
        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], AnalyticsEvent::CatalogDownloaded);
    }
}
