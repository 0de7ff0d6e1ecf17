//! Shared class strings so every form section reads the same way.

/// Colour coding of the calculator sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Property,
    Terrain,
    Building,
    Results,
}

// ============================================
// PANELS
// ============================================

pub fn section_panel(accent: Accent) -> &'static str {
    match accent {
        Accent::Property => "rounded-xl border border-slate-800 border-l-4 border-l-sky-500 bg-slate-900/40 p-6",
        Accent::Terrain => "rounded-xl border border-slate-800 border-l-4 border-l-emerald-500 bg-slate-900/40 p-6",
        Accent::Building => "rounded-xl border border-slate-800 border-l-4 border-l-violet-500 bg-slate-900/40 p-6",
        Accent::Results => "rounded-xl border border-slate-800 border-l-4 border-l-rose-500 bg-slate-900/40 p-6",
    }
}

pub fn section_title(accent: Accent) -> &'static str {
    match accent {
        Accent::Property => "text-sm font-semibold uppercase tracking-wide text-sky-300",
        Accent::Terrain => "text-sm font-semibold uppercase tracking-wide text-emerald-300",
        Accent::Building => "text-sm font-semibold uppercase tracking-wide text-violet-300",
        Accent::Results => "text-sm font-semibold uppercase tracking-wide text-rose-300",
    }
}

pub fn panel_solid() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

// ============================================
// INPUTS / BUTTONS
// ============================================

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn btn_primary() -> &'static str {
    "w-full rounded-lg bg-emerald-500 px-4 py-3 text-sm font-semibold text-white hover:bg-emerald-400"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

pub fn link_class() -> &'static str {
    "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    }
}

// ============================================
// TABLES / TEXT
// ============================================

pub fn table_container() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden"
}

pub fn table_header() -> &'static str {
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500"
}

pub fn table_divider() -> &'static str {
    "divide-y divide-slate-800"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}
