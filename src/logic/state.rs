use super::alu::{AluOutput, Operation, OPERAND_MASK};

/// Which quantity the edit button currently advances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub enum EditTarget {
    #[default]
    FirstOperand,
    Operation,
    SecondOperand,
}

impl EditTarget {
    pub fn next(self) -> Self {
        match self {
            EditTarget::FirstOperand => EditTarget::Operation,
            EditTarget::Operation => EditTarget::SecondOperand,
            EditTarget::SecondOperand => EditTarget::FirstOperand,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            EditTarget::FirstOperand => 0,
            EditTarget::Operation => 1,
            EditTarget::SecondOperand => 2,
        }
    }
}

/// The three buttons, in scan order
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum ButtonAction {
    Edit,
    NextTarget,
    Reset,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 3] = [
        ButtonAction::Edit,
        ButtonAction::NextTarget,
        ButtonAction::Reset,
    ];
}

/// Outcome of applying a button action, tells the output side what to redraw
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum StateChange {
    FirstOperand(u8),
    Operation(Operation),
    SecondOperand(u8),
    Target(EditTarget),
    Reset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub struct AluState {
    pub first_operand: u8,
    pub second_operand: u8,
    pub operation: Operation,
    pub edit_target: EditTarget,
}

impl AluState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: ButtonAction) -> StateChange {
        match action {
            ButtonAction::Edit => match self.edit_target {
                EditTarget::FirstOperand => {
                    self.first_operand = (self.first_operand + 1) & OPERAND_MASK;
                    StateChange::FirstOperand(self.first_operand)
                }
                EditTarget::Operation => {
                    self.operation = self.operation.next();
                    StateChange::Operation(self.operation)
                }
                EditTarget::SecondOperand => {
                    self.second_operand = (self.second_operand + 1) & OPERAND_MASK;
                    StateChange::SecondOperand(self.second_operand)
                }
            },
            ButtonAction::NextTarget => {
                self.edit_target = self.edit_target.next();
                StateChange::Target(self.edit_target)
            }
            ButtonAction::Reset => {
                *self = Self::default();
                StateChange::Reset
            }
        }
    }

    pub fn result(&self) -> AluOutput {
        self.operation.apply(self.first_operand, self.second_operand)
    }
}
