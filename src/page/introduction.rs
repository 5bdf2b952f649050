use std::path::Path;

use chrono::NaiveDate;

use crate::page::style::{
    Align, Inline, TextBlock, TextRole, bold, italic, link, link_runs, quiet, quiet_runs,
    subscript, text,
};
use crate::page::surface::{Block, ImageBlock};

const AUTHOR: &str = "Jan Allen Pasia";
const AUTHOR_URL: &str = "https://www.linkedin.com/in/jan-pasia/";
const HERO_IMAGE: &str = "intro-1.jpg";

fn published_on() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2021, 4, 14)
}

/// Narrative blocks of the introduction page, images resolved under `assets`.
#[must_use]
pub fn introduction_blocks(assets: &Path) -> Vec<Block> {
    let mut byline = vec![text("By "), link_runs(vec![quiet(AUTHOR, 1.0)], AUTHOR_URL)];
    if let Some(date) = published_on() {
        byline.push(text(format!(", {}", date.format("%-d %B %Y"))));
    }

    vec![
        Block::Text(TextBlock::centered_title(vec![
            text("Predicting Candidate Wind Farm"),
            Inline::LineBreak,
            text("Locations in the Philippines"),
            Inline::LineBreak,
            text("Through Time Series Modeling"),
            Inline::LineBreak,
            text("and Spatial Downscaling"),
        ])),
        Block::Text(TextBlock::body(vec![italic(byline)]).aligned(Align::Center)),
        Block::Spacer(2),
        Block::Image(ImageBlock::full_width(
            assets.join(HERO_IMAGE),
            "Wind turbines on a ridge",
        )),
        Block::Text(
            TextBlock::new(
                TextRole::Caption,
                vec![quiet_runs(
                    vec![
                        text("Photo by "),
                        link(
                            "Dimitry Anikin",
                            "https://unsplash.com/@anikinearthwalker?utm_source=unsplash&utm_medium=referral&utm_content=creditCopyText",
                        ),
                        text(" on "),
                        link(
                            "Unsplash",
                            "https://unsplash.com/s/photos/wind-turbine?utm_source=unsplash&utm_medium=referral&utm_content=creditCopyText",
                        ),
                    ],
                    0.8,
                )],
            )
            .aligned(Align::Right),
        ),
        Block::Spacer(2),
        heading("What is a wind farm?"),
        paragraph(vec![
            text(
                "A wind farm (also wind park, wind power station, wind power plant, or wind power system) \
                 is a group of big machines called ",
            ),
            bold("wind turbines"),
            text(
                ". Most wind turbines have the standard 3 blades. \
                 These blades move when there is enough wind passing through the area of the turbine. \
                 This movement rotates the generator, which in turn, generates electricity.",
            ),
        ]),
        paragraph(vec![
            text("According to "),
            link("Wikipedia", "https://en.wikipedia.org/wiki/Wind_farm"),
            text(
                ", wind farms vary in the size of land covered. \
                 The size of the farm area is supported by the area's ability to harvest ",
            ),
            bold("wind energy"),
            text(". Wind farms can be built on either land or sea."),
        ]),
        heading("Why should I care about wind farms?"),
        paragraph(vec![
            text("According to the "),
            link(
                "2012 study by Stacey L. Dolan and Garvin A. Heath",
                "https://onlinelibrary.wiley.com/doi/abs/10.1111/j.1530-9290.2012.00464.x",
            ),
            text(", the median life cycle greenhouse gas emissions of utility-scale "),
            bold("wind power systems"),
            text(" is "),
            bold("11 grams"),
            text(" CO"),
            subscript("2"),
            text(
                "-equivalent per kilowatt-hour of electricity produced. \
                 This median value was computed from 126 estimates published across 49 literature references.",
            ),
        ]),
        paragraph(vec![
            text("Meanwhile, according to the "),
            link(
                "2012 study by Michael Whitaker, Garvin A. Heath, Patrick R. O'Donoughue, and Martin Vorum",
                "https://onlinelibrary.wiley.com/doi/full/10.1111/j.1530-9290.2012.00465.x",
            ),
            text(", the median life cycle greenhouse gas emissions of "),
            bold("coal-fired electricity generation"),
            text(" is "),
            bold("980 grams"),
            text(" CO"),
            subscript("2"),
            text(
                "-equivalent per kilowatt-hour of electricity produced. \
                 This median value was computed from 164 estimates published across 53 literature references.",
            ),
        ]),
        paragraph(vec![
            text("Lastly, according to the "),
            link(
                "2014 study by Patrick R. O'Donoughue, Garvin A. Heath, Stacey L. Dolan, and Martin Vorum",
                "https://onlinelibrary.wiley.com/doi/abs/10.1111/jiec.12084",
            ),
            text(", the median life cycle greenhouse gas emissions of "),
            bold("natural gas-fired combustion turbine (NGCT) and combined-cycle (NGCC) systems"),
            text(" are "),
            bold("450 grams and 670 grams"),
            text(" CO"),
            subscript("2"),
            text(
                "-equivalent per kilowatt-hour of electricity produced respectively. \
                 These median values were computed from 69 estimates out of 42 references.",
            ),
        ]),
        paragraph(vec![
            text("In short, the carbon footprint of "),
            bold("wind power"),
            text(" is at best "),
            bold("89 and 40 times smaller"),
            text(" than that of "),
            bold("coal and natural gas systems"),
            text(
                " respectively. If the Philippines were to rely on wind power systems instead of \
                 coal and natural gas, we could make an impact in curbing the amount of carbon emissions.",
            ),
        ]),
    ]
}

fn heading(value: &str) -> Block {
    Block::Text(TextBlock::new(TextRole::Heading, vec![bold(value)]))
}

fn paragraph(content: Vec<Inline>) -> Block {
    Block::Text(TextBlock::body(content))
}
