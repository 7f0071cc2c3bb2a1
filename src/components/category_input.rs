//! Category Input Component
//!
//! Chip list of the draft's categories plus a text input with fuzzy
//! autocomplete over the categories already in use.
//! Supports semicolon-separated batch input for pasting several at once.

use leptos::prelude::*;

const MAX_SUGGESTIONS: usize = 5;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Get the current search segment (text after the last semicolon)
fn current_segment(input: &str) -> &str {
    input.rsplit(';').next().unwrap_or("").trim()
}

/// Replace the current segment (after last semicolon) with a new value
fn replace_current_segment(input: &str, new_segment: &str) -> String {
    match input.rfind(';') {
        Some(pos) => format!("{}; {}", &input[..pos], new_segment),
        None => new_segment.to_string(),
    }
}

/// Split batch input into category names
fn split_batch(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Known categories matching the segment being typed, minus ones already chosen
fn suggestions_for(input: &str, available: &[String], chosen: &[String]) -> Vec<String> {
    let segment = current_segment(input);
    if segment.is_empty() {
        return vec![];
    }
    available
        .iter()
        .filter(|name| !chosen.contains(name))
        .filter(|name| fuzzy_match(segment, name))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Category chips with autocomplete input
///
/// Props:
/// - selected: categories currently on the draft
/// - available: categories in use across all cards
/// - on_add: called once per category name entered
/// - on_remove: called with the name of a removed chip
#[component]
pub fn CategoryInput(
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] available: Signal<Vec<String>>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        suggestions_for(&input_value.get(), &available.get(), &selected.get())
    };

    let accept_suggestion = move |name: String| {
        set_input_value.update(|v| *v = replace_current_segment(v, &name));
        set_selected_idx.set(0);
    };

    // Commit every semicolon-separated name; the last one snaps to the
    // highlighted suggestion when it fuzzily matches.
    let commit = move || {
        let names = split_batch(&input_value.get_untracked());
        let sugg = suggestions();
        let highlighted = sugg.get(selected_idx.get_untracked()).cloned();
        let last = names.len().saturating_sub(1);

        for (i, name) in names.into_iter().enumerate() {
            let name = match &highlighted {
                Some(s) if i == last && fuzzy_match(&name, s) => s.clone(),
                _ => name,
            };
            on_add.run(name);
        }
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                commit();
            }
            "Tab" if !sugg.is_empty() => {
                ev.prevent_default();
                if let Some(name) = sugg.get(selected_idx.get()) {
                    accept_suggestion(name.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.update(|sel| *sel = sel.saturating_sub(1));
            }
            _ => {}
        }
    };

    view! {
        <div class="category-input">
            <div class="category-chips">
                <For
                    each=move || selected.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let for_remove = name.clone();
                        view! {
                            <span class="category-tag removable">
                                {name}
                                <button
                                    type="button"
                                    class="remove-tag-btn"
                                    on:click=move |_| on_remove.run(for_remove.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <div class="category-entry">
                <input
                    type="text"
                    class="field-input"
                    placeholder="Add or select categories..."
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:keydown=on_keydown
                />
                <button type="button" class="add-category-btn" on:click=move |_| commit()>"+"</button>
            </div>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    return view! { <div></div> }.into_any();
                }
                let highlighted = selected_idx.get();
                view! {
                    <div class="autocomplete-list">
                        {sugg.into_iter().enumerate().map(|(i, name)| {
                            let for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == highlighted { "autocomplete-item selected" } else { "autocomplete-item" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        accept_suggestion(for_click.clone());
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("wk", "Work"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("kw", "Work"));
    }

    #[test]
    fn test_segments() {
        assert_eq!(current_segment("Work; ho"), "ho");
        assert_eq!(replace_current_segment("Work; ho", "Home"), "Work; Home");
        assert_eq!(replace_current_segment("ho", "Home"), "Home");
        assert_eq!(split_batch("a; ;b ;"), vec!["a", "b"]);
    }

    #[test]
    fn test_suggestions_skip_chosen_and_cap() {
        let available = names(&["Home", "Homework", "Hobby", "Health", "Hiking", "Hats", "Work"]);
        let chosen = names(&["Home"]);

        let sugg = suggestions_for("h", &available, &chosen);
        assert_eq!(sugg.len(), MAX_SUGGESTIONS);
        assert!(!sugg.contains(&"Home".to_string()));

        assert!(suggestions_for("Work; ", &available, &chosen).is_empty());
    }
}
