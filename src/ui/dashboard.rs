//! Dashboard screen: the menu and the sliding content region.

use ratatui::{Frame, layout::{Rect, Layout, Constraint, Direction}, style::{Style, Color, Modifier}, widgets::{Block, List, ListItem, Paragraph, Borders, Wrap}, text::{Line, Span}};
use crate::app::App;
use crate::services::{PageBody, PageContent};
use crate::state::{CommentField, DashboardFocus, Direction as SlideDirection, Panel, RegionPhase};

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

pub fn draw_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let (direction, menu_size) = if area.width >= app.config.min_two_column_width {
        (Direction::Horizontal, Constraint::Length(24))
    } else {
        (Direction::Vertical, Constraint::Length(app.dashboard.menu.len() as u16 + 2))
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([menu_size, Constraint::Min(0)])
        .split(area);

    draw_menu(f, app, chunks[0]);
    draw_region(f, app, chunks[1]);
}

fn draw_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let active = app.dashboard.active_menu;
    let items: Vec<ListItem> = app.dashboard.menu.iter().enumerate().map(|(i, item)| {
        let marker = if active == Some(i) { "● " } else { "  " };
        ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Magenta)),
            Span::raw(item.label()),
        ]))
    }).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu")
            .border_style(focus_style(app.dashboard.focus == DashboardFocus::Menu)))
        .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut app.dashboard.menu_state);
}

/// Part of `area` the region occupies at this point of its transition.
fn region_rect(app: &App, area: Rect) -> Rect {
    let progress = app.dashboard.transition_progress();
    let hidden = match app.dashboard.phase {
        RegionPhase::Opening | RegionPhase::Sliding => progress,
        RegionPhase::Closing => 1.0 - progress,
        RegionPhase::Open | RegionPhase::Closed => 0.0,
    };
    let offset = (area.width as f32 * hidden) as u16;
    let from_left = app.dashboard.phase == RegionPhase::Sliding
        && app.dashboard.slide_direction == SlideDirection::Previous;
    if from_left {
        Rect { width: area.width - offset, ..area }
    } else {
        Rect { x: area.x + offset, width: area.width - offset, ..area }
    }
}

fn draw_region(f: &mut Frame, app: &mut App, area: Rect) {
    if app.dashboard.phase == RegionPhase::Closed {
        f.render_widget(
            Paragraph::new(Span::styled("Pick something from the menu.", Style::default().fg(Color::DarkGray)))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    }
    let area = region_rect(app, area);
    if area.width < 4 {
        return;
    }

    let focused = app.dashboard.focus != DashboardFocus::Menu;
    let processing = app.dashboard.processing;
    let pagenum = app.dashboard.stack.current().pagenum;
    let total = app.dashboard.stack.len();
    let has_next = app.dashboard.stack.has_next();

    let title = app.dashboard.stack.current().title().unwrap_or("").to_string();
    let back = Span::styled("[←] back", Style::default().fg(Color::Yellow));
    let next = if has_next {
        Span::styled("[→] next", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[→] next", Style::default().fg(Color::DarkGray))
    };
    let mut footer = vec![back, Span::raw("  "), Span::raw(format!("page {} of {}", pagenum, total)), Span::raw("  "), next];
    if processing {
        footer.push(Span::styled("  loading...", Style::default().fg(Color::Cyan).add_modifier(Modifier::SLOW_BLINK)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(format!(" {} ", title))
        .title_bottom(Line::from(footer));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let form_focus = (app.dashboard.focus == DashboardFocus::CommentForm).then_some(app.dashboard.comment_form.field);
    let form = &app.dashboard.comment_form;
    let form_lines = comment_form_lines(&form.name, &form.body, form.disabled, form_focus);
    let panel = app.dashboard.stack.current_mut();
    draw_panel(f, panel, inner, processing, form_lines);
}

fn draw_panel(f: &mut Frame, panel: &mut Panel, area: Rect, processing: bool, form_lines: Vec<Line<'static>>) {
    let Some(content) = &panel.content else {
        let text = if processing { "Loading..." } else { "" };
        f.render_widget(Paragraph::new(text), area);
        return;
    };

    let links: Vec<ListItem> = link_items(content);
    let link_list = List::new(links)
        .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    if let PageBody::List(_) = content.body {
        f.render_stateful_widget(link_list, area, &mut panel.selection);
        return;
    }

    let link_count = content.links().len() as u16;
    let is_post = content.post_view().is_some();
    let detail = detail_lines(content);
    let form_height = if is_post { form_lines.len() as u16 + 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(link_count + 1),
            Constraint::Min(0),
            Constraint::Length(form_height),
        ])
        .split(area);

    f.render_stateful_widget(
        link_list.block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
        &mut panel.selection,
    );
    f.render_widget(Paragraph::new(detail).wrap(Wrap { trim: false }), chunks[1]);
    if is_post {
        f.render_widget(
            Paragraph::new(form_lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Leave a comment [Tab]")),
            chunks[2],
        );
    }
}

fn link_items(content: &PageContent) -> Vec<ListItem<'static>> {
    match &content.body {
        PageBody::List(entries) => entries.iter().map(|entry| {
            let mut lines = vec![Line::from(Span::styled(entry.heading.clone(), Style::default().add_modifier(Modifier::BOLD)))];
            if !entry.text.is_empty() {
                let first = entry.text.lines().next().unwrap_or("").to_string();
                lines.push(Line::from(Span::styled(format!("   {}", first), Style::default().fg(Color::DarkGray))));
            }
            ListItem::new(lines)
        }).collect(),
        _ => content.links().into_iter().map(|(label, _)| ListItem::new(label)).collect(),
    }
}

fn detail_lines(content: &PageContent) -> Vec<Line<'static>> {
    let label = |s: &str| Span::styled(format!("{:<10}", s), Style::default().fg(Color::Cyan));
    match &content.body {
        PageBody::List(_) => vec![],
        PageBody::Post(view) => {
            let mut lines: Vec<Line> = view.post.body.lines().map(|l| Line::from(l.to_string())).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(view.comment_count_label(), Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))));
            for comment in &view.comments {
                lines.push(Line::from(vec![
                    Span::styled(comment.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" <{}>", comment.email), Style::default().fg(Color::DarkGray)),
                ]));
                for l in comment.body.lines() {
                    lines.push(Line::from(format!("  {}", l)));
                }
            }
            lines
        }
        PageBody::Profile(user) => vec![
            Line::from(vec![label("Name"), Span::raw(user.name.clone())]),
            Line::from(vec![label("Email"), Span::raw(user.email.clone())]),
            Line::from(vec![label("Phone"), Span::raw(user.phone.clone())]),
            Line::from(vec![label("Website"), Span::raw(user.website.clone())]),
            Line::from(vec![label("Address"), Span::raw(format!(
                "{} {}, {} {}",
                user.address.street, user.address.suite, user.address.city, user.address.zipcode
            ))]),
            Line::from(vec![label("Company"), Span::raw(user.company.name.clone())]),
            Line::from(vec![label(""), Span::styled(user.company.catch_phrase.clone(), Style::default().add_modifier(Modifier::ITALIC))]),
        ],
        PageBody::Photo(photo) => vec![
            Line::from(vec![label("Image"), Span::raw(photo.url.clone())]),
            Line::from(vec![label("Thumbnail"), Span::raw(photo.thumbnail_url.clone())]),
        ],
    }
}

fn comment_form_lines(name: &str, body: &str, disabled: bool, focus: Option<CommentField>) -> Vec<Line<'static>> {
    let field_style = |field: CommentField| {
        if disabled {
            Style::default().fg(Color::DarkGray)
        } else if focus == Some(field) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };
    let submit_style = if focus == Some(CommentField::Submit) && !disabled {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        field_style(CommentField::Submit)
    };
    let mut lines = vec![Line::from(vec![
        Span::styled("Name: ", field_style(CommentField::Name)),
        Span::raw(name.to_string()),
    ])];
    let mut body_lines = body.split('\n');
    lines.push(Line::from(vec![
        Span::styled("Body: ", field_style(CommentField::Body)),
        Span::raw(body_lines.next().unwrap_or("").to_string()),
    ]));
    for l in body_lines {
        lines.push(Line::from(format!("      {}", l)));
    }
    let submit = if disabled { "[ Posting... ]" } else { "[ Submit ]" };
    lines.push(Line::from(Span::styled(submit, submit_style)));
    lines
}
