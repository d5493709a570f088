//! Interactive terminal demo for the entity list screen.
//!
//! Stands in for the windowed presentation layer: renders the view model as
//! text and maps typed commands onto screen messages.
//!
//! Commands:
//!   show                      print the current list
//!   filter <text>             set the filter text (empty to clear)
//!   toggle <name>             flip an entity's checkbox
//!   all <category>            check a category's aggregate box
//!   none <category>           uncheck a category's aggregate box
//!   edit <name>               open the "picker" (prompts for r g b a [rainbow])
//!   reset <name>              reset an entity
//!   expand <category>         expand a section
//!   collapse <category>       collapse a section
//!   quit

use mobpalette::{
    Category, ColorValue, EntityInfo, EntityListScreen, FuzzyRanker, Message, ScreenError,
    SelectionStore, SharedRainbowRegistry, SpawnGroup, StaticCatalog, ViewModel,
};
use mobpalette::widget_state::CollapsibleState;
use std::io::{BufRead, Write as _};

fn vanilla_catalog() -> StaticCatalog {
    use SpawnGroup::*;
    let names: &[(&str, SpawnGroup)] = &[
        ("Cow", Creature),
        ("Pig", Creature),
        ("Sheep", Creature),
        ("Chicken", Creature),
        ("Horse", Creature),
        ("Wolf", Creature),
        ("Squid", WaterCreature),
        ("Glow Squid", UndergroundWaterCreature),
        ("Axolotl", Axolotls),
        ("Tropical Fish", WaterAmbient),
        ("Dolphin", WaterCreature),
        ("Zombie", Monster),
        ("Skeleton", Monster),
        ("Creeper", Monster),
        ("Spider", Monster),
        ("Enderman", Monster),
        ("Witch", Monster),
        ("Bat", Ambient),
        ("Boat", Misc),
        ("Minecart", Misc),
        ("Iron Golem", Misc),
    ];
    StaticCatalog::new(
        names
            .iter()
            .enumerate()
            .map(|(i, (name, group))| EntityInfo::new(i as u32, *name, *group))
            .collect(),
    )
}

fn parse_category(name: &str) -> Option<Category> {
    Category::all()
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(name))
}

fn print_view(view: &ViewModel) {
    if view.sections.is_empty() {
        println!("  (no matches)");
        return;
    }
    for section in &view.sections {
        let marker = if section.expanded { "v" } else { ">" };
        let aggregate = if section.aggregate_checked { "x" } else { " " };
        println!("{} [{}] {} ({})", marker, aggregate, section.label, section.row_count());
        if !section.expanded {
            continue;
        }
        for row in &section.rows {
            let checked = if row.checked { "x" } else { " " };
            let swatch = if row.swatch == ColorValue::TRANSPARENT {
                "-".to_string()
            } else {
                let tag = if row.swatch.rainbow { " rainbow" } else { "" };
                format!(
                    "#{:02x}{:02x}{:02x}{:02x}{}",
                    row.swatch.r, row.swatch.g, row.swatch.b, row.swatch.a, tag
                )
            };
            println!("    [{}] {:<16} {}", checked, row.name, swatch);
        }
    }
}

fn parse_color(line: &str) -> Option<ColorValue> {
    let mut parts = line.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let a = parts.next()?.parse().ok()?;
    let mut color = ColorValue::rgba(r, g, b, a);
    if parts.next() == Some("rainbow") {
        color = color.with_rainbow();
    }
    Some(color)
}

fn main() {
    env_logger::init();

    let catalog = vanilla_catalog();
    let registry = SharedRainbowRegistry::new();
    let mut screen = EntityListScreen::new(catalog.clone(), FuzzyRanker::new(), SelectionStore::new())
        .expect("empty selection is always valid")
        .with_rainbow_registry(Box::new(registry.clone()))
        .with_change_hook(Box::new(|| log::info!("selection changed, settings dirty")));

    println!("mobpalette demo - type 'show' to print the list, 'quit' to exit");
    print_view(screen.view());

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let result: Result<(), ScreenError> = match command {
            "" => Ok(()),
            "quit" | "exit" => break,
            "show" => Ok(()),
            "filter" => screen.update(Message::FilterChanged(rest.to_string())),
            "toggle" => match catalog.find_by_name(rest) {
                Some(info) => {
                    let checked = !screen.selection().is_active(info.id);
                    screen.update(Message::RowToggled(info.id, checked))
                }
                None => {
                    println!("unknown entity: {rest}");
                    Ok(())
                }
            },
            "all" | "none" => match parse_category(rest) {
                Some(category) => {
                    screen.update(Message::AggregateToggled(category, command == "all"))
                }
                None => {
                    println!("unknown category: {rest}");
                    Ok(())
                }
            },
            "expand" | "collapse" => match parse_category(rest) {
                Some(category) => screen.update(Message::SectionToggled(
                    category,
                    CollapsibleState::new(command == "expand"),
                )),
                None => {
                    println!("unknown category: {rest}");
                    Ok(())
                }
            },
            "edit" => match catalog.find_by_name(rest) {
                Some(info) => {
                    let id = info.id;
                    screen.update(Message::EditColor(id)).and_then(|()| {
                        let request = screen.take_picker_request().expect("edit queues a request");
                        println!(
                            "picker open on #{:02x}{:02x}{:02x}{:02x}; enter: r g b a [rainbow]",
                            request.color.r, request.color.g, request.color.b, request.color.a
                        );
                        let mut input = String::new();
                        let _ = stdin.lock().read_line(&mut input);
                        match parse_color(input.trim()) {
                            Some(color) => screen.update(Message::ColorPicked(id, color)),
                            None => {
                                println!("picker cancelled");
                                Ok(())
                            }
                        }
                    })
                }
                None => {
                    println!("unknown entity: {rest}");
                    Ok(())
                }
            },
            "reset" => match catalog.find_by_name(rest) {
                Some(info) => screen.update(Message::ResetEntity(info.id)),
                None => {
                    println!("unknown entity: {rest}");
                    Ok(())
                }
            },
            other => {
                println!("unknown command: {other}");
                Ok(())
            }
        };

        match result {
            Ok(()) => print_view(screen.view()),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    let selection = screen.into_selection();
    println!(
        "closing with {} entr{} ({} rainbow color{})",
        selection.len(),
        if selection.len() == 1 { "y" } else { "ies" },
        registry.len(),
        if registry.len() == 1 { "" } else { "s" },
    );
}
