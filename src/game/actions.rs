use log::debug;

use crate::error::EventError;

use super::{Game, InputEvent, PendingAction, RoundStatus, Screen};

impl Game {
    fn ensure_playing(&self) -> Result<(), EventError> {
        if self.screen != Screen::Table {
            return Err(EventError::NotAtTable);
        }
        if self.status.is_terminal() {
            return Err(EventError::RoundOver);
        }
        Ok(())
    }

    fn ensure_round_over(&self) -> Result<(), EventError> {
        if self.screen != Screen::Table {
            return Err(EventError::NotAtTable);
        }
        if !self.status.is_terminal() {
            return Err(EventError::RoundInProgress);
        }
        Ok(())
    }

    /// Applies a one-shot input event from the presentation layer.
    ///
    /// Hit and stand queue a pending action consumed by the next
    /// [`update`](Game::update); play-again and return-to-title are only
    /// accepted once the round has ended. Frozen input is enforced here, not
    /// by the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not valid for the current screen or
    /// round status.
    pub fn apply(&mut self, event: InputEvent) -> Result<(), EventError> {
        match event {
            InputEvent::Start => {
                if self.screen != Screen::Title {
                    return Err(EventError::NotOnTitle);
                }
                self.screen = Screen::Table;
                self.start_round();
            }
            InputEvent::Quit => {
                self.should_quit = true;
            }
            InputEvent::Hit => {
                self.ensure_playing()?;
                self.pending = Some(PendingAction::Hit);
            }
            InputEvent::Stand => {
                self.ensure_playing()?;
                self.pending = Some(PendingAction::Stand);
            }
            InputEvent::PlayAgain => {
                self.ensure_round_over()?;
                self.pending = Some(PendingAction::PlayAgain);
                self.status = RoundStatus::Playing;
                self.banner_offset = 0;
            }
            InputEvent::ReturnToTitle => {
                self.ensure_round_over()?;
                self.screen = Screen::Title;
                self.status = RoundStatus::Playing;
                self.pending = None;
                self.banner_offset = 0;
                self.wins = 0;
            }
        }
        Ok(())
    }

    /// Draws one card into the player's hand and checks for a bust.
    pub(super) fn resolve_hit(&mut self) {
        let Some(card) = self.shoe.draw() else {
            self.status = RoundStatus::EmptyShoe;
            return;
        };

        self.player_hand.add_card(card);
        debug!("player draws, hand value {:?}", self.player_hand.value());

        if self.player_hand.value().is_bust() {
            self.status = RoundStatus::Busted;
        }
    }
}
