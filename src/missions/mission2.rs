//! Mission 2: pick the right array operation and find the target item.

use cargo_bay_store::{Action, GameItem, GameState, GameStore, StoreError};
use derive_more::Display;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

use super::Feedback;

/// Operations offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ArrayOperation {
    /// Linear search for an item.
    #[display("search_item()")]
    Search,
    /// Delete an item from the array.
    #[display("delete_item()")]
    Delete,
    /// Sort the array.
    #[display("sort_items()")]
    Sort,
}

impl ArrayOperation {
    /// Operation at a menu position, wrapping around.
    pub fn at(index: usize) -> ArrayOperation {
        let all: Vec<ArrayOperation> = ArrayOperation::iter().collect();
        all[index % all.len()]
    }

    /// One-line explanation shown under the name.
    pub fn description(self) -> &'static str {
        match self {
            ArrayOperation::Search => "Look through each container until the item is found",
            ArrayOperation::Delete => "Remove an item from the array",
            ArrayOperation::Sort => "Arrange items in order",
        }
    }
}

/// Reasons a guess could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GuessError {
    /// No operation was chosen before guessing.
    #[display("Please select an operation first!")]
    NoOperation,
    /// An operation other than search is selected.
    #[display("Wrong operation selected! Use search_item() to find the {}.", _0)]
    WrongOperation(GameItem),
    /// The guess is not a container id of the bay.
    #[display("Please enter a valid container number!")]
    InvalidGuess,
}

impl std::error::Error for GuessError {}

/// Result of an evaluated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guessed container holds the target.
    Found(u32),
    /// The guessed container holds something else, or nothing.
    Miss {
        /// Guessed container id.
        guess: u32,
        /// What the guessed container holds.
        contents: Option<GameItem>,
    },
}

/// Controller for mission 2.
#[derive(Debug, Clone)]
pub struct Mission2 {
    target: GameItem,
    selected: Option<ArrayOperation>,
    guess_input: String,
    feedback: Option<Feedback>,
    found: Option<u32>,
}

impl Mission2 {
    /// Creates a controller looking for `target`.
    #[instrument]
    pub fn new(target: GameItem) -> Self {
        Self {
            target,
            selected: None,
            guess_input: String::new(),
            feedback: None,
            found: None,
        }
    }

    /// Item the player has to find.
    pub fn target(&self) -> GameItem {
        self.target
    }

    /// Operation chosen so far.
    pub fn selected(&self) -> Option<ArrayOperation> {
        self.selected
    }

    /// Text typed so far for the guess.
    pub fn guess_input(&self) -> &str {
        &self.guess_input
    }

    /// Latest feedback message.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Container found by a correct guess.
    pub fn found(&self) -> Option<u32> {
        self.found
    }

    /// Checks if the target has been found.
    pub fn is_complete(&self) -> bool {
        self.found.is_some()
    }

    /// Appends a digit to the guess input.
    pub fn push_input(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.guess_input.push(c);
        }
    }

    /// Deletes the last character of the guess input.
    pub fn pop_input(&mut self) {
        self.guess_input.pop();
    }

    /// Replaces the guess input.
    pub fn set_guess_input(&mut self, input: impl Into<String>) {
        self.guess_input = input.into();
    }

    /// Chooses an operation and explains whether it fits the task.
    #[instrument(skip(self))]
    pub fn select_operation(&mut self, operation: ArrayOperation) {
        self.selected = Some(operation);
        self.feedback = Some(match operation {
            ArrayOperation::Search => Feedback::info(format!(
                "Good choice! Now enter the container number that contains {}.",
                self.target
            )),
            _ => Feedback::error(format!(
                "Wrong operation! You need to search for the {} first.",
                self.target
            )),
        });
    }

    /// Evaluates the typed guess against the bay.
    ///
    /// Every outcome also updates [`Mission2::feedback`].
    ///
    /// # Errors
    ///
    /// Returns a [`GuessError`] when the guess cannot be evaluated.
    #[instrument(skip(self, state), fields(input = %self.guess_input))]
    pub fn submit_guess(&mut self, state: &GameState) -> Result<GuessOutcome, GuessError> {
        let result = self.evaluate(state);
        self.feedback = Some(match &result {
            Ok(GuessOutcome::Found(id)) => Feedback::success(format!(
                "Correct! Container {} contains the {}.",
                id, self.target
            )),
            Ok(GuessOutcome::Miss {
                guess,
                contents: Some(item),
            }) => Feedback::error(format!(
                "Incorrect! Container {} contains {}. Try again!",
                guess, item
            )),
            Ok(GuessOutcome::Miss {
                guess,
                contents: None,
            }) => Feedback::error(format!("Incorrect! Container {} is empty. Try again!", guess)),
            Err(e) => Feedback::error(e.to_string()),
        });
        result
    }

    fn evaluate(&mut self, state: &GameState) -> Result<GuessOutcome, GuessError> {
        match self.selected {
            None => return Err(GuessError::NoOperation),
            Some(ArrayOperation::Search) => {}
            Some(_) => return Err(GuessError::WrongOperation(self.target)),
        }

        let guess = self
            .guess_input
            .trim()
            .parse::<u32>()
            .map_err(|_| GuessError::InvalidGuess)?;
        let container = state.container(guess).ok_or(GuessError::InvalidGuess)?;

        if state.search_for_item(self.target) == Some(guess) {
            debug!(guess, "Target found");
            self.found = Some(guess);
            Ok(GuessOutcome::Found(guess))
        } else {
            Ok(GuessOutcome::Miss {
                guess,
                contents: container.item(),
            })
        }
    }

    /// Completes the mission once the target has been found.
    ///
    /// # Errors
    ///
    /// Returns the store error if the mission cannot be completed.
    #[instrument(skip(self, store))]
    pub fn finish(&mut self, store: &mut GameStore) -> Result<bool, StoreError> {
        if !self.is_complete() {
            return Ok(false);
        }
        store.dispatch(Action::CompleteMission { mission: 2 })?;
        info!(item = %self.target, "Mission 2 complete");
        Ok(true)
    }
}
