use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_KEY, STYLE_MODELINE, STYLE_STATS, STYLE_STATUS};

// Status line: mode block, key hints, and the step count of the current or
// last sort on the right. Hints are dropped from the right until it fits.
pub fn render_modeline(m: &Model, total_width: usize) -> String {
    let quit_label = if m.is_busy() { "stop" } else { "quit" };
    let pairs_def: [(&str, &str); 6] = [
        ("bubble", "b"),
        ("insertion", "i"),
        ("merge", "m"),
        ("quick", "q"),
        ("shuffle", "r"),
        (quit_label, "⎋"),
    ];

    let mut used = 0usize;

    let mode = m.mode();
    let mode_w = mode.chars().count() + 2; // padding 1 left + 1 right
    let mode_rendered = if mode_w <= total_width {
        used += mode_w;
        STYLE_STATUS.clone().padding(0, 1, 0, 1).render(&mode)
    } else {
        String::new()
    };

    let stats_plain = m
        .steps()
        .map(|(algo, steps)| format!("{} {steps} steps ", algo.name()))
        .unwrap_or_default();
    let stats_w = stats_plain.chars().count();
    let stats_rendered = if stats_w > 0 && used + stats_w <= total_width {
        used += stats_w;
        STYLE_STATS.render(&stats_plain)
    } else {
        String::new()
    };

    // each pair is preceded by two spaces of separation
    let mut pairs_rendered = String::new();
    for (desc, key) in pairs_def {
        let w = 2 + desc.chars().count() + 1 + key.chars().count();
        if used + w > total_width {
            break;
        }
        used += w;
        pairs_rendered.push_str(&STYLE_MODELINE.render("  "));
        pairs_rendered.push_str(&STYLE_MODELINE.render(desc));
        pairs_rendered.push_str(&STYLE_MODELINE.render(":"));
        pairs_rendered.push_str(&STYLE_KEY.render(key));
    }

    let pad = total_width - used;
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    format!("{mode_rendered}{pairs_rendered}{filler}{stats_rendered}")
}
