use crate::config::Config;
use crate::detector::core::{init, transition, Effect, Event, State};
use crate::detector::run_effect::RunEffect;
use crate::image_analyzer::interface::ImageAnalyzer;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

/// Owns the view state and applies events to it. Effects run on their own
/// threads and report back through the channel.
pub struct Detector {
    state: State,
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
}

impl Detector {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_analyzer: Arc<dyn ImageAnalyzer + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("detector");
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(logger.clone(), image_analyzer, event_sender);
        let (state, effects) = init();

        let detector = Self {
            state,
            config,
            logger,
            run_effect,
            event_receiver,
        };
        detector.spawn_effects(effects);
        detector
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn set_waker(&mut self, ctx: egui::Context) {
        self.run_effect.set_waker(ctx);
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!(
            "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
            self.state, event,
        ));

        let (new_state, effects) = transition(&self.config, self.state.clone(), event);

        let _ = self.logger.info(&format!(
            "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state, effects
        ));

        self.state = new_state;
        self.spawn_effects(effects);
    }

    /// Applies every event that has already arrived. Returns whether any did.
    pub fn poll(&mut self) -> bool {
        let mut received = false;
        loop {
            match self.event_receiver.try_recv() {
                Ok(event) => {
                    received = true;
                    self.dispatch(event);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return received,
            }
        }
    }

    /// Waits up to `timeout` for the next event and applies it.
    #[cfg(test)]
    pub fn process_next(&mut self, timeout: std::time::Duration) -> bool {
        use std::sync::mpsc::RecvTimeoutError;

        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
