//! Composes the sheet panels into a single screen.
use charsheet_core::CharacterRecord;
use charsheet_core::derive::Derived;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::state::ViewState;
use crate::widgets;

pub fn render(frame: &mut Frame, record: &CharacterRecord, view: &ViewState) {
    let derived = Derived::from_record(record);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(13),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(top[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(top[1]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);

    widgets::header::render(frame, rows[0], record, view);
    widgets::stats::render(frame, left[0], record, &derived, view);
    widgets::vitals::render(frame, left[1], record, view);
    widgets::combat::render(frame, right[0], &derived);
    widgets::armor::render(frame, right[1], record, &derived, view);
    widgets::items::render(frame, bottom[0], record, view);
    widgets::notes::render(frame, bottom[1], record, view);
    widgets::footer::render(frame, rows[3], view);
}
