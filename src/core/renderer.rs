use crate::domain::document::{Block, ReportDocument, Span, TableStyle, TextStyle};
use crate::domain::model::{Plan, Schedule};
use crate::domain::ports::AssetSource;

pub const DEFAULT_FACILITY_NAME: &str = "VitalForce Gym";
pub const DEFAULT_SUBTITLE: &str = "Personalized Training Plan";
pub const DEFAULT_PLAN_HEADING: &str = "Training Plan";
pub const DEFAULT_CLOSING_MESSAGE: &str =
    "Stay consistent and disciplined! Every day brings you closer to your goal.";

const BULLET: &str = "•";

/// Static text of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub facility_name: String,
    pub subtitle: String,
    pub plan_heading: String,
    pub closing_message: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            facility_name: DEFAULT_FACILITY_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            plan_heading: DEFAULT_PLAN_HEADING.to_string(),
            closing_message: DEFAULT_CLOSING_MESSAGE.to_string(),
        }
    }
}

pub struct ReportRenderer<A: AssetSource> {
    layout: ReportLayout,
    assets: A,
}

impl<A: AssetSource> ReportRenderer<A> {
    pub fn new(layout: ReportLayout, assets: A) -> Self {
        Self { layout, assets }
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Lays out `plan` as blocks. Days and exercises keep their stored order.
    pub fn render(&self, plan: &Plan) -> ReportDocument {
        let mut document =
            ReportDocument::new(format!("{} - {}", self.layout.subtitle, plan.member_name()));

        match self.assets.header_graphic() {
            Some(Ok(graphic)) => document.push(Block::Image { graphic }),
            Some(Err(e)) => {
                tracing::warn!("Rendering without header graphic: {}", e);
                document.warnings.push(e.to_string());
            }
            None => {}
        }

        document.push(Block::Heading {
            text: self.layout.facility_name.clone(),
            style: TextStyle::title(),
        });
        document.push(Block::Subheading {
            text: self.layout.subtitle.clone(),
            style: TextStyle::subtitle(),
        });
        document.push(Block::Spacer { height: 10.0 });

        document.push(Block::KeyValueTable {
            rows: identity_rows(plan),
            style: TableStyle::identity(),
        });
        document.push(Block::Spacer { height: 20.0 });

        document.push(Block::Paragraph {
            spans: vec![
                Span::bold("Description: "),
                Span::plain(plan.routine().description.clone()),
            ],
            style: TextStyle::body(),
        });
        document.push(Block::Spacer { height: 20.0 });

        document.push(Block::Subheading {
            text: self.layout.plan_heading.clone(),
            style: TextStyle::subtitle(),
        });

        for (day, exercises) in plan.schedule().iter() {
            document.push(Block::Paragraph {
                spans: vec![Span::bold(Schedule::day_label(day))],
                style: TextStyle::body(),
            });
            document.push(Block::ItemizedList {
                bullet: BULLET.to_string(),
                items: exercises.to_vec(),
                style: TextStyle::body(),
            });
            document.push(Block::Spacer { height: 10.0 });
        }

        document.push(Block::Spacer { height: 30.0 });
        document.push(Block::Paragraph {
            spans: vec![Span::plain(self.layout.closing_message.clone())],
            style: TextStyle::footer(),
        });

        tracing::debug!(
            "Rendered report for '{}' with {} blocks",
            plan.member_name(),
            document.blocks().len()
        );

        document
    }
}

/// Identity table rows in their fixed order.
pub fn identity_rows(plan: &Plan) -> Vec<(String, String)> {
    vec![
        ("Name:".to_string(), plan.member_name().to_string()),
        ("Age:".to_string(), plan.member_age().to_string()),
        ("Goal:".to_string(), plan.goal().display_name().to_string()),
        ("Requested days:".to_string(), plan.requested_days().to_string()),
        ("Days in generated plan:".to_string(), plan.schedule_length().to_string()),
        ("Routine:".to_string(), plan.routine().name.clone()),
    ]
}
