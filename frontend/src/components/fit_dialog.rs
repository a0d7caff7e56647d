//! "Throw a fit" 对话框
//!
//! 选项框 -> 加载提示 -> 结果框。

use crate::auth::use_auth;
use crate::components::icons::Sparkles;
use crate::components::modal::Modal;
use crate::components::notice::use_notice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use throwafit::{FitOptions, Outfit, generate_fit};
use throwafit_shared::{COLOR_CHOICES, PATTERN_CHOICES, STYLE_CHOICES};

/// 可多选的筛选维度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    Color,
    Pattern,
    Style,
}

impl Filter {
    const ALL: [Filter; 3] = [Filter::Color, Filter::Pattern, Filter::Style];

    fn title(self) -> &'static str {
        match self {
            Filter::Color => "Colors",
            Filter::Pattern => "Patterns",
            Filter::Style => "Styles",
        }
    }

    fn choices(self) -> &'static [&'static str] {
        match self {
            Filter::Color => &COLOR_CHOICES,
            Filter::Pattern => &PATTERN_CHOICES,
            Filter::Style => &STYLE_CHOICES,
        }
    }

    fn is_selected(self, options: &FitOptions, value: &str) -> bool {
        let selected = match self {
            Filter::Color => &options.colors,
            Filter::Pattern => &options.patterns,
            Filter::Style => &options.styles,
        };
        selected.iter().any(|v| v == value)
    }

    fn toggle(self, options: &mut FitOptions, value: &str) {
        match self {
            Filter::Color => options.toggle_color(value),
            Filter::Pattern => options.toggle_pattern(value),
            Filter::Style => options.toggle_style(value),
        }
    }
}

/// 一组可多选的筛选标签；全随机时禁用但保留已选值
#[component]
fn ChoiceGroup(filter: Filter, options: RwSignal<FitOptions>) -> impl IntoView {
    let disabled = move || options.with(|o| o.full_random);

    view! {
        <div class="form-control">
            <span class="label-text font-bold mb-1">{filter.title()}</span>
            <div class="flex flex-wrap gap-2">
                {filter
                    .choices()
                    .iter()
                    .map(|choice| {
                        let choice = *choice;
                        view! {
                            <label class="label cursor-pointer gap-2">
                                <input type="checkbox" class="checkbox checkbox-sm"
                                    disabled=disabled
                                    prop:checked=move || options.with(|o| filter.is_selected(o, choice))
                                    on:change=move |_| options.update(|o| filter.toggle(o, choice))
                                />
                                <span class="label-text capitalize">{choice}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn FitDialog(open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let notice = use_notice();

    let options = RwSignal::new(FitOptions::default());
    let is_generating = RwSignal::new(false);
    let outfit = RwSignal::new(Option::<Outfit>::None);
    let result_open = RwSignal::new(false);

    let on_generate = move |_| {
        open.set(false);
        is_generating.set(true);

        let session = auth.session();
        let request = options.get_untracked();
        spawn_local(async move {
            match generate_fit(session.api(), session.storage(), &request).await {
                Ok(generated) => {
                    outfit.set(Some(generated));
                    result_open.set(true);
                }
                Err(e) => notice.client_error(&e),
            }
            is_generating.set(false);
        });
    };

    view! {
        <Modal open=open title="Throw a Fit">
            <div class="space-y-4">
                <div class="form-control">
                    <label class="label cursor-pointer">
                        <span class="label-text font-bold">"Full random"</span>
                        <input type="checkbox" class="toggle toggle-primary"
                            prop:checked=move || options.with(|o| o.full_random)
                            on:change=move |_| options.update(FitOptions::toggle_full_random)
                        />
                    </label>
                </div>

                {Filter::ALL
                    .into_iter()
                    .map(|filter| view! { <ChoiceGroup filter=filter options=options /> })
                    .collect_view()}

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="button" class="btn btn-primary gap-2" on:click=on_generate>
                        <Sparkles attr:class="h-4 w-4" /> "Generate"
                    </button>
                </div>
            </div>
        </Modal>

        // 加载提示
        <Show when=move || is_generating.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-base-300/60">
                <div class="card bg-base-100 shadow-xl p-6 flex flex-row items-center gap-3">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    "Putting your fit together..."
                </div>
            </div>
        </Show>

        <Modal open=result_open title="Your Fit">
            <div class="grid grid-cols-2 gap-4">
                {move || outfit.with(|fit| match fit {
                    Some(fit) if !fit.is_empty() => fit
                        .pieces()
                        .map(|item| view! {
                            <div class="card bg-base-200 p-2 items-center">
                                <img src=item.image_url.clone() alt=item.display_name().to_string() class="h-32 object-contain" />
                                <span class="text-sm mt-1">{item.display_name().to_string()}</span>
                            </div>
                        })
                        .collect_view()
                        .into_any(),
                    _ => view! { <p class="col-span-2 text-base-content/60">"No matching items in your closet."</p> }.into_any(),
                })}
            </div>
            <div class="modal-action">
                <button type="button" class="btn" on:click=move |_| result_open.set(false)>"Close"</button>
                <button type="button" class="btn btn-primary" on:click=move |_| {
                    result_open.set(false);
                    open.set(true);
                }>"Try again"</button>
            </div>
        </Modal>
    }
}
