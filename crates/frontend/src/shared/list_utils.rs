/// Утилиты для списковых страниц: поиск, сортировка, общий строковый фильтр.
use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Объект, который можно найти по текстовому фильтру
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Объект, сортируемый по имени поля
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Пустой фильтр возвращает список без изменений.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

// Пока пользователь печатает, фильтр не дёргаем
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    /// Вызывается после паузы в наборе текста
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    // Значение в поле до срабатывания debounce, стартует с текущего фильтра
    let (input_value, set_input_value) = signal(value.get_untracked());
    // Timeout не Send, поэтому local storage
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value.clone());
        });
        // Сброс предыдущего таймера отменяет его
        if let Some(previous) = pending.try_update_value(|slot| slot.replace(timeout)).flatten() {
            previous.cancel();
        }
    };

    let clear_filter = move |_| {
        if let Some(previous) = pending.try_update_value(|slot| slot.take()).flatten() {
            previous.cancel();
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Bersihkan"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка таблицы
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        return " ⇅";
    }
    if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

/// Клик по заголовку: повторный клик меняет направление
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}
