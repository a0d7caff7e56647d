use crate::auth::use_auth;
use crate::closet::use_closet;
use crate::components::icons::{ArrowLeft, UploadIcon};
use crate::components::notice::use_notice;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use js_sys::Uint8Array;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use throwafit::{Category, ImageFile, UploadDraft, upload_item};
use wasm_bindgen_futures::JsFuture;

/// 读取用户选择的文件内容
async fn read_file(file: web_sys::File) -> Option<ImageFile> {
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    Some(ImageFile {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let auth = use_auth();
    let closet = use_closet();
    let notice = use_notice();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(Option::<Category>::None);
    let image = RwSignal::new(Option::<ImageFile>::None);
    let is_uploading = RwSignal::new(false);
    let file_ref = NodeRef::<html::Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            image.set(None);
            return;
        };
        spawn_local(async move {
            match read_file(file).await {
                Some(file) => image.set(Some(file)),
                None => notice.error("Could not read the selected file"),
            }
        });
    };

    let reset_form = move || {
        name.set(String::new());
        category.set(None);
        image.set(None);
        if let Some(input) = file_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = UploadDraft {
            name: name.get_untracked(),
            category: category.get_untracked(),
            image: image.get_untracked(),
        };
        let session = auth.session();

        is_uploading.set(true);
        spawn_local(async move {
            match upload_item(session.api(), session.storage(), &draft).await {
                Ok(item) => {
                    notice.success(format!("Uploaded {}", item.display_name()));
                    closet.insert(item);
                    reset_form();
                    router.navigate(AppRoute::Closet);
                }
                Err(e) => notice.client_error(&e),
            }
            is_uploading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-xl mx-auto space-y-6">
                <div class="flex items-center gap-2">
                    <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Home)>
                        <ArrowLeft attr:class="h-5 w-5" />
                    </button>
                    <h2 class="text-2xl font-bold">"Upload an item"</h2>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label for="item_image" class="label">
                                <span class="label-text">"Photo"</span>
                            </label>
                            <input id="item_image" type="file" accept="image/*"
                                node_ref=file_ref
                                class="file-input file-input-bordered w-full"
                                on:change=on_file_change
                            />
                            <Show when=move || image.with(Option::is_some)>
                                <span class="label-text-alt text-base-content/60 mt-1">
                                    {move || image.with(|img| img.as_ref().map(|img| format!("{} ({} KB)", img.file_name, img.bytes.len() / 1024)).unwrap_or_default())}
                                </span>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label for="item_name" class="label">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input id="item_name" type="text" placeholder="Blue denim jacket"
                                class="input input-bordered w-full"
                                on:input=move |ev| name.set(event_target_value(&ev))
                                prop:value=move || name.get()
                            />
                        </div>

                        <div class="form-control">
                            <label for="item_category" class="label">
                                <span class="label-text">"Category"</span>
                            </label>
                            <select id="item_category" class="select select-bordered w-full"
                                on:change=move |ev| category.set(Category::parse(&event_target_value(&ev)))
                            >
                                <option value="" selected=move || category.with(Option::is_none)>"Choose a category"</option>
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! {
                                        <option value=c.as_str() selected=move || category.get() == Some(c)>{c.label()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary gap-2" disabled=move || is_uploading.get()>
                                {move || if is_uploading.get() {
                                    view! { <span class="loading loading-spinner"></span> "Uploading..." }.into_any()
                                } else {
                                    view! { <UploadIcon attr:class="h-4 w-4" /> "Upload" }.into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
