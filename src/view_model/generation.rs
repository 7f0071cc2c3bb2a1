//! Request Tagging
//!
//! A view model hands out a `Ticket` when it starts a request and advances its
//! `Generation` whenever the request's target goes away (dialog closed, another
//! card shown). A response whose ticket no longer matches is dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn ticket(&self) -> Ticket {
        Ticket(self.0)
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}
