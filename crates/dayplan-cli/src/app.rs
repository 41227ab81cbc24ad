//! The menu-driven application
//!
//! Thin consumer of the `Time` operator set: event CRUD plus one demo
//! screen per operator family. All `Time` construction flows through the
//! app's `ConstructionCounter`, including operator results and postfix
//! snapshots (adopted where they are produced).

use crate::console::{Console, Result};
use dayplan_config::Seed;
use dayplan_core::{Event, Schedule};
use dayplan_util::{ConstructionCounter, ScalarOutcome, Time};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub struct App<R, W> {
    console: Console<R, W>,
    schedule: Schedule,
    counter: ConstructionCounter,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, clear_screen: bool) -> Self {
        Self {
            console,
            schedule: Schedule::new(),
            counter: ConstructionCounter::new(),
            clear_screen,
        }
    }

    /// Preload events from a validated seed
    pub fn preload(&mut self, seed: Seed) {
        for event in seed.events {
            let start = self.counter.adopt(event.start);
            let end = self.counter.adopt(event.end);
            let planned = self.counter.adopt(event.planned);
            self.schedule.add(Event::new(event.name, start, end, planned));
        }
        info!(event_count = self.schedule.len(), "Seed applied");
    }

    /// Main menu loop; returns when the user picks Exit
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.clear()?;
            self.console.say("=== DAY SCHEDULE ===")?;
            self.console.say("1. Manage events")?;
            self.console.say("2. Unary operator demo")?;
            self.console.say("3. Arithmetic assignment demo")?;
            self.console.say("4. Binary operator demo")?;
            self.console.say("5. Comparison demo")?;
            self.console.say("6. Schedule and statistics")?;
            self.console.say("0. Exit")?;

            match self.console.read_selection("Select an action: ")? {
                Some(1) => self.manage_events()?,
                Some(2) => self.unary_demo()?,
                Some(3) => self.arithmetic_demo()?,
                Some(4) => self.binary_demo()?,
                Some(5) => self.comparison_demo()?,
                Some(6) => self.report_menu()?,
                Some(0) => {
                    self.console.say("Exiting.")?;
                    debug!(constructions = self.counter.count(), "Session ended");
                    return Ok(());
                }
                Some(_) => {
                    self.console.say("Invalid choice! Try again.")?;
                    self.console.pause()?;
                }
                None => self.console.pause()?,
            }
        }
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            self.console.clear_screen()?;
        }
        Ok(())
    }

    /// List events and read a 1-based selection; `None` on cancel, empty
    /// schedule, or bad input (already reported)
    fn select_event(&mut self, prompt: &str) -> Result<Option<usize>> {
        if self.schedule.is_empty() {
            self.console
                .say("Schedule is empty! Add an event first.")?;
            self.console.pause()?;
            return Ok(None);
        }

        self.console.say(prompt)?;
        for (i, event) in self.schedule.events().iter().enumerate() {
            self.console.say(&format!(
                "{}. {} ({} - {})",
                i + 1,
                event.name,
                event.start(),
                event.end()
            ))?;
        }

        match self.console.read_selection("Select (0 to cancel): ")? {
            Some(0) => Ok(None),
            Some(n) if n >= 1 && (n as usize) <= self.schedule.len() => Ok(Some(n as usize - 1)),
            Some(_) => {
                self.console.say("Invalid selection!")?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    // --- Menu 1: event management ---------------------------------------

    fn manage_events(&mut self) -> anyhow::Result<()> {
        loop {
            self.clear()?;
            self.console.say("=== MANAGE EVENTS ===")?;
            self.console
                .say(&format!("Events in schedule: {}", self.schedule.len()))?;
            self.console.blank()?;
            self.console.say("1. Add event")?;
            self.console.say("2. Edit event")?;
            self.console.say("3. Remove event")?;
            self.console.say("4. List events")?;
            self.console.say("0. Back")?;

            match self.console.read_selection("Select: ")? {
                Some(1) => self.add_event()?,
                Some(2) => self.edit_event()?,
                Some(3) => self.remove_event()?,
                Some(4) => {
                    self.print_schedule(false)?;
                    self.console.pause()?;
                }
                Some(0) => return Ok(()),
                Some(_) => {
                    self.console.say("Invalid choice!")?;
                    self.console.pause()?;
                }
                None => self.console.pause()?,
            }
        }
    }

    fn add_event(&mut self) -> Result<()> {
        let name = self.console.read_name("\nEvent name: ")?;
        if name.is_empty() {
            self.console.say("Name cannot be empty!")?;
            self.console.pause()?;
            return Ok(());
        }

        let Some((h, m, s)) = self
            .console
            .read_triple("Start time (hours minutes seconds): ")?
        else {
            self.console.pause()?;
            return Ok(());
        };
        let start = self.counter.make(h, m, s);

        let Some((h, m, s)) = self
            .console
            .read_triple("End time (hours minutes seconds): ")?
        else {
            self.console.pause()?;
            return Ok(());
        };
        let end = self.counter.make(h, m, s);

        let Some((h, m, s)) = self
            .console
            .read_triple("Planned duration (hours minutes seconds): ")?
        else {
            self.console.pause()?;
            return Ok(());
        };
        let planned = self.counter.make(h, m, s);

        self.schedule.add(Event::new(name, start, end, planned));
        self.console.say("Event added!")?;
        self.console.pause()?;
        Ok(())
    }

    fn edit_event(&mut self) -> anyhow::Result<()> {
        let Some(index) = self.select_event("\nSelect an event to edit:")? else {
            return Ok(());
        };

        let (old_name, old_start, old_end, old_planned) = {
            let event = self.schedule.get(index)?;
            (event.name.clone(), event.start(), event.end(), event.planned())
        };

        self.console
            .say(&format!("\nCurrent name: {old_name}"))?;
        let new_name = self.console.read_name("New name (Enter to keep): ")?;

        // Each field keeps its old value when the new input is invalid
        let start = match self
            .console
            .read_triple("New start time (hours minutes seconds): ")?
        {
            Some((h, m, s)) => self.counter.make(h, m, s),
            None => old_start,
        };
        let end = match self
            .console
            .read_triple("New end time (hours minutes seconds): ")?
        {
            Some((h, m, s)) => self.counter.make(h, m, s),
            None => old_end,
        };
        let planned = match self
            .console
            .read_triple("New planned duration (hours minutes seconds): ")?
        {
            Some((h, m, s)) => self.counter.make(h, m, s),
            None => old_planned,
        };

        let event = self.schedule.get_mut(index)?;
        if !new_name.is_empty() {
            event.name = new_name;
        }
        event.retime(start, end, planned);

        self.console.say("Event updated!")?;
        self.console.pause()?;
        Ok(())
    }

    fn remove_event(&mut self) -> anyhow::Result<()> {
        let Some(index) = self.select_event("\nSelect an event to remove:")? else {
            return Ok(());
        };

        let removed = self.schedule.remove(index)?;
        self.console
            .say(&format!("Removed '{}'.", removed.name))?;
        self.console.pause()?;
        Ok(())
    }

    fn print_schedule(&mut self, with_pace: bool) -> Result<()> {
        if self.schedule.is_empty() {
            self.console.say("\nSchedule is empty!")?;
            return Ok(());
        }

        self.console.say("\n=== FULL SCHEDULE ===")?;
        for i in 0..self.schedule.len() {
            let (line1, line2, line3, pace_line) = {
                let event = &self.schedule.events()[i];
                (
                    format!("{}. {}", i + 1, event.name),
                    format!("   Start: {} | End: {}", event.start(), event.end()),
                    format!(
                        "   Planned: {} | Actual: {}",
                        event.planned(),
                        event.actual()
                    ),
                    if with_pace {
                        Some((event.plan_difference(), event.pace().label()))
                    } else {
                        None
                    },
                )
            };
            self.console.say(&line1)?;
            self.console.say(&line2)?;
            self.console.say(&line3)?;
            if let Some((difference, pace)) = pace_line {
                let difference = self.counter.adopt(difference);
                self.console
                    .say(&format!("   Difference: {difference} ({pace})"))?;
            }
            self.console.blank()?;
        }
        Ok(())
    }

    // --- Menu 2: unary operators ----------------------------------------

    fn unary_demo(&mut self) -> anyhow::Result<()> {
        let Some(index) = self.select_event("\nDemo on which event?")? else {
            return Ok(());
        };

        loop {
            self.clear()?;
            self.console.say("=== UNARY OPERATORS ===")?;
            {
                let event = self.schedule.get(index)?;
                self.console.say(&format!("Event: {}", event.name))?;
                self.console
                    .say(&format!("Start time: {}", event.start()))?;
            }
            self.console.blank()?;
            self.console.say("1. Prefix increment (+1 second)")?;
            self.console.say("2. Postfix increment")?;
            self.console
                .say("3. Prefix decrement (-1 second, floor at zero)")?;
            self.console.say("4. Postfix decrement")?;
            self.console.say("0. Back")?;

            match self.console.read_selection("Select: ")? {
                Some(1) => {
                    let start = self.schedule.get_mut(index)?.start_mut();
                    let before = *start;
                    let after = start.increment();
                    self.console.say(&format!("\nBefore: {before}"))?;
                    self.console
                        .say(&format!("Returned (updated) value: {after}"))?;
                    self.console.pause()?;
                }
                Some(2) => {
                    let start = self.schedule.get_mut(index)?.start_mut();
                    let snapshot = start.post_increment();
                    let now = *start;
                    let snapshot = self.counter.adopt(snapshot);
                    self.console
                        .say(&format!("\nReturned (pre-increment) value: {snapshot}"))?;
                    self.console.say(&format!("Stored value now: {now}"))?;
                    self.console.pause()?;
                }
                Some(3) => {
                    let start = self.schedule.get_mut(index)?.start_mut();
                    let before = *start;
                    let after = start.decrement();
                    self.console.say(&format!("\nBefore: {before}"))?;
                    self.console
                        .say(&format!("Returned (updated) value: {after}"))?;
                    self.console.pause()?;
                }
                Some(4) => {
                    let start = self.schedule.get_mut(index)?.start_mut();
                    let snapshot = start.post_decrement();
                    let now = *start;
                    let snapshot = self.counter.adopt(snapshot);
                    self.console
                        .say(&format!("\nReturned (pre-decrement) value: {snapshot}"))?;
                    self.console.say(&format!("Stored value now: {now}"))?;
                    self.console.pause()?;
                }
                Some(0) => return Ok(()),
                Some(_) => {
                    self.console.say("Invalid choice!")?;
                    self.console.pause()?;
                }
                None => self.console.pause()?,
            }
        }
    }

    // --- Menu 3: arithmetic assignment ----------------------------------

    fn arithmetic_demo(&mut self) -> anyhow::Result<()> {
        let Some(index) = self.select_event("\nDemo on which event?")? else {
            return Ok(());
        };

        loop {
            self.clear()?;
            self.console.say("=== ARITHMETIC ASSIGNMENT ===")?;
            {
                let event = self.schedule.get(index)?;
                self.console.say(&format!("Event: {}", event.name))?;
                self.console
                    .say(&format!("Start time: {}", event.start()))?;
            }
            self.console.blank()?;
            self.console.say("1. Add a time (+=)")?;
            self.console
                .say("2. Subtract a time (-=, floor at zero)")?;
            self.console.say("3. Multiply by a scalar (*=)")?;
            self.console.say("4. Divide by a scalar (/=)")?;
            self.console.say("0. Back")?;

            match self.console.read_selection("Select: ")? {
                Some(1) => {
                    if let Some((h, m, s)) = self
                        .console
                        .read_triple("Time to add (hours minutes seconds): ")?
                    {
                        let delta = self.counter.make(h, m, s);
                        let start = self.schedule.get_mut(index)?.start_mut();
                        let before = *start;
                        *start += delta;
                        let after = *start;
                        self.console.say(&format!("\nBefore: {before}"))?;
                        self.console
                            .say(&format!("After += {delta}: {after}"))?;
                    }
                    self.console.pause()?;
                }
                Some(2) => {
                    if let Some((h, m, s)) = self
                        .console
                        .read_triple("Time to subtract (hours minutes seconds): ")?
                    {
                        let delta = self.counter.make(h, m, s);
                        let start = self.schedule.get_mut(index)?.start_mut();
                        let before = *start;
                        *start -= delta;
                        let after = *start;
                        self.console.say(&format!("\nBefore: {before}"))?;
                        self.console
                            .say(&format!("After -= {delta}: {after}"))?;
                    }
                    self.console.pause()?;
                }
                Some(3) => {
                    if let Some(scalar) = self.console.read_scalar("Scalar: ")? {
                        let start = self.schedule.get_mut(index)?.start_mut();
                        let before = *start;
                        let _ = start.mul_scalar_assign(scalar);
                        let after = *start;
                        self.console.say(&format!("\nBefore: {before}"))?;
                        self.console
                            .say(&format!("After *= {scalar}: {after}"))?;
                    }
                    self.console.pause()?;
                }
                Some(4) => {
                    if let Some(scalar) = self.console.read_scalar("Scalar: ")? {
                        let start = self.schedule.get_mut(index)?.start_mut();
                        let before = *start;
                        match start.div_scalar_assign(scalar) {
                            ScalarOutcome::Applied => {
                                let after = *start;
                                self.console.say(&format!("\nBefore: {before}"))?;
                                self.console
                                    .say(&format!("After /= {scalar}: {after}"))?;
                            }
                            ScalarOutcome::IgnoredZeroDivisor => {
                                self.console
                                    .say("\nDivision by zero ignored; time unchanged.")?;
                            }
                        }
                    }
                    self.console.pause()?;
                }
                Some(0) => return Ok(()),
                Some(_) => {
                    self.console.say("Invalid choice!")?;
                    self.console.pause()?;
                }
                None => self.console.pause()?,
            }
        }
    }

    // --- Menu 4: binary operators ---------------------------------------

    fn binary_demo(&mut self) -> anyhow::Result<()> {
        let Some(first) = self.select_event("\nFirst event:")? else {
            return Ok(());
        };
        let Some(second) = self.select_event("\nSecond event:")? else {
            return Ok(());
        };

        loop {
            self.clear()?;
            self.console.say("=== BINARY OPERATORS ===")?;
            let (a, b) = self.start_pair(first, second)?;
            self.console.blank()?;
            self.console.say("1. Addition (time1 + time2)")?;
            self.console
                .say("2. Subtraction (time1 - time2, floor at zero)")?;
            self.console.say("3. Multiply by a scalar (time1 * s)")?;
            self.console.say("4. Divide by a scalar (time1 / s)")?;
            self.console.say("0. Back")?;

            match self.console.read_selection("Select: ")? {
                Some(1) => {
                    let sum = self.counter.adopt(a + b);
                    self.console.say(&format!("\nSum: {sum}"))?;
                    self.console.pause()?;
                }
                Some(2) => {
                    let difference = self.counter.adopt(a - b);
                    self.console
                        .say(&format!("\nDifference: {difference}"))?;
                    self.console.pause()?;
                }
                Some(3) => {
                    if let Some(scalar) = self.console.read_scalar("Scalar: ")? {
                        let product = self.counter.adopt(a * scalar);
                        self.console.say(&format!("\nProduct: {product}"))?;
                    }
                    self.console.pause()?;
                }
                Some(4) => {
                    if let Some(scalar) = self.console.read_scalar("Scalar: ")? {
                        let quotient = self.counter.adopt(a / scalar);
                        if scalar == 0.0 {
                            self.console
                                .say("\nZero divisor: quotient left unchanged.")?;
                        }
                        self.console.say(&format!("\nQuotient: {quotient}"))?;
                    }
                    self.console.pause()?;
                }
                Some(0) => return Ok(()),
                Some(_) => {
                    self.console.say("Invalid choice!")?;
                    self.console.pause()?;
                }
                None => self.console.pause()?,
            }
        }
    }

    /// Print both operands and return their start times
    fn start_pair(&mut self, first: usize, second: usize) -> anyhow::Result<(Time, Time)> {
        let (line_a, line_b, a, b) = {
            let event_a = self.schedule.get(first)?;
            let event_b = self.schedule.get(second)?;
            (
                format!("{} (start): {}", event_a.name, event_a.start()),
                format!("{} (start): {}", event_b.name, event_b.start()),
                event_a.start(),
                event_b.start(),
            )
        };
        self.console.say(&line_a)?;
        self.console.say(&line_b)?;
        Ok((a, b))
    }

    // --- Menu 5: comparisons --------------------------------------------

    fn comparison_demo(&mut self) -> anyhow::Result<()> {
        let Some(first) = self.select_event("\nFirst event:")? else {
            return Ok(());
        };
        let Some(second) = self.select_event("\nSecond event:")? else {
            return Ok(());
        };

        self.clear()?;
        self.console.say("=== COMPARISON OPERATORS ===")?;
        let (a, b) = self.start_pair(first, second)?;
        self.console.blank()?;
        self.console
            .say(&format!("time1 <  time2: {}", a < b))?;
        self.console
            .say(&format!("time1 >  time2: {}", a > b))?;
        self.console
            .say(&format!("time1 <= time2: {}", a <= b))?;
        self.console
            .say(&format!("time1 >= time2: {}", a >= b))?;
        self.console
            .say(&format!("time1 == time2: {}", a == b))?;
        self.console
            .say(&format!("time1 != time2: {}", a != b))?;
        self.console.pause()?;
        Ok(())
    }

    // --- Menu 6: schedule and statistics --------------------------------

    fn report_menu(&mut self) -> anyhow::Result<()> {
        loop {
            self.clear()?;
            self.console.say("=== SCHEDULE AND STATISTICS ===")?;
            self.console.blank()?;
            self.console.say("1. Full schedule")?;
            self.console.say("2. Program statistics")?;
            self.console.say("3. Interval between two events")?;
            self.console.say("0. Back")?;

            match self.console.read_selection("Select: ")? {
                Some(1) => {
                    self.print_schedule(true)?;
                    self.console.pause()?;
                }
                Some(2) => {
                    self.console.say("\n=== STATISTICS ===")?;
                    self.console
                        .say(&format!("Events in schedule: {}", self.schedule.len()))?;
                    self.console.say(&format!(
                        "Time values constructed: {}",
                        self.counter.count()
                    ))?;
                    self.console.pause()?;
                }
                Some(3) => {
                    self.interval_report()?;
                    self.console.pause()?;
                }
                Some(0) => return Ok(()),
                Some(_) => {
                    self.console.say("Invalid choice!")?;
                    self.console.pause()?;
                }
                None => self.console.pause()?,
            }
        }
    }

    fn interval_report(&mut self) -> anyhow::Result<()> {
        let Some(first) = self.select_event("\nFirst event:")? else {
            return Ok(());
        };
        let Some(second) = self.select_event("\nSecond event:")? else {
            return Ok(());
        };

        let (from_line, to_line) = {
            let from = self.schedule.get(first)?;
            let to = self.schedule.get(second)?;
            (
                format!("End of '{}': {}", from.name, from.end()),
                format!("Start of '{}': {}", to.name, to.start()),
            )
        };

        let gap = self.schedule.interval_between(first, second)?;
        let gap = self.counter.adopt(gap);

        self.console.say("\nInterval between events:")?;
        self.console.say(&from_line)?;
        self.console.say(&to_line)?;
        self.console.say(&format!("Interval: {gap}"))?;
        Ok(())
    }
}
