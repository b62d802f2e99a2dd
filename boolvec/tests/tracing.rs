//! Check the growth events emitted by [BoolVec] with an in-memory [tracing_subscriber::Layer].

use boolvec::BoolVec;
use std::{
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{field, Event, Subscriber};
use tracing_subscriber::{layer::Context, layer::SubscriberExt, Layer, Registry};

/// A recorded growth event.
#[derive(Default, Debug, PartialEq, Eq)]
struct Growth {
    message: String,
    old: u64,
    new: u64,
}

impl field::Visit for Growth {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            "old" => self.old = value,
            "new" => self.new = value,
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// Collects every event into a shared list.
#[derive(Clone, Default)]
struct Collector {
    events: Arc<Mutex<Vec<Growth>>>,
}

impl<S: Subscriber> Layer<S> for Collector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut growth = Growth::default();
        event.record(&mut growth);
        self.events.lock().unwrap().push(growth);
    }
}

fn record<F: FnOnce()>(f: F) -> Vec<Growth> {
    let collector = Collector::default();
    let subscriber = Registry::default().with(collector.clone());
    tracing::subscriber::with_default(subscriber, f);
    let mut events = collector.events.lock().unwrap();
    std::mem::take(&mut *events)
}

fn growth(old: u64, new: u64) -> Growth {
    Growth {
        message: "grew storage".to_string(),
        old,
        new,
    }
}

#[test]
fn test_growth_is_traced() {
    let events = record(|| {
        let mut bv = BoolVec::new();
        for i in 0..41 {
            bv.add(i % 2 == 0);
        }
    });
    assert_eq!(
        events,
        vec![growth(0, 10), growth(10, 20), growth(20, 40), growth(40, 80)]
    );
}

#[test]
fn test_no_event_without_growth() {
    let events = record(|| {
        let mut bv = BoolVec::with_capacity(4);
        bv.add_all([true, false, true, false]);
        bv.remove_first().unwrap();
        bv.clear();
        bv.add(true);
    });
    assert!(events.is_empty());
}
