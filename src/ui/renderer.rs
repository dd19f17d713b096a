use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{App, Panel},
    sequence::{count_complete_incomplete_codons, StrandKind},
    ui::{all_strand_lines, strand_list_lines, translation_lines},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(rows[1]);

    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(columns[0]);

    render_title(f, app, rows[0]);
    render_strand_list(f, app, StrandKind::Dna, lists[0]);
    render_strand_list(f, app, StrandKind::Mrna, lists[1]);
    render_output(f, app, columns[1]);
    render_status_bar(f, app, rows[2]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled("Strandseq", Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(app.source.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled(
            format!("DNA: {}", app.sequencer.count(StrandKind::Dna)),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("mRNA: {}", app.sequencer.count(StrandKind::Mrna)),
            Style::default().fg(Color::Magenta),
        ),
    ];

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_strand_list(f: &mut Frame, app: &App, kind: StrandKind, area: Rect) {
    let focused = app.focus == kind;
    let lines = strand_list_lines(app.sequencer.strands(kind), app.cursor(kind), focused);

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!("{kind} Strands"))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .scroll((app.cursor(kind).saturating_sub(area.height.saturating_sub(3) as usize) as u16, 0));
    f.render_widget(list_widget, area);
}

fn render_output(f: &mut Frame, app: &App, area: Rect) {
    let (title, lines) = match &app.panel {
        Panel::Welcome => (
            "Output".to_string(),
            vec![
                Line::from("What would you like to do?"),
                Line::from(""),
                Line::from("1. Display Strands"),
                Line::from("2. Reverse Strand"),
                Line::from("3. Transcribe DNA to mRNA"),
                Line::from("4. Translate mRNA to Amino Acids"),
                Line::from("5. Exit"),
            ],
        ),
        Panel::Strands => ("Strands".to_string(), all_strand_lines(&app.sequencer)),
        Panel::Translation { index, name, calls } => {
            let mut title = format!("Translation of mRNA {index} ({name})");
            if let Some(strand) = app.sequencer.mrna().get(index - 1) {
                if count_complete_incomplete_codons(strand).1 > 0 {
                    title.push_str(", partial codon ignored");
                }
            }
            (title, translation_lines(calls))
        }
    };

    let output_widget = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(output_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let message_color = if app.status.is_error { Color::Red } else { Color::Green };

    let status_widget = Paragraph::new(vec![
        Line::from(Span::styled(app.status.text.clone(), Style::default().fg(message_color))),
        Line::from(Span::styled(
            "1 display  2 reverse  3 transcribe  4 translate  5/q exit  Tab switch list  ↑/↓ select",
            Style::default().fg(Color::White),
        )),
    ])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
